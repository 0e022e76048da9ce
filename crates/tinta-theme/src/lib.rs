//! # tinta-theme — accessible palettes from one base color
//!
//! Derives readable text colors, tinted neutrals and a complementary
//! accent tuned to a minimum contrast ratio against whichever neutral
//! background it will sit on.
//!
//! # Architecture
//!
//! ```text
//! hex base color
//!     │
//!     ▼
//! tinta-color:  hex → Rgb → Hsl
//!     │
//!     ▼
//! contrast.rs:  relative luminance, contrast ratio, text selection
//!     │
//!     ▼
//! neutral.rs:   near-white / near-black tinted with the complementary hue
//!     │
//!     ▼
//! accent.rs:    bounded lightness search for the complementary accent
//!     │
//!     ▼
//! palette.rs:   assemble Palette (base states, accents, lines)
//!     │
//!     ▼
//! css.rs:       custom properties for a light or dark theme
//! ```
//!
//! Every function is pure: the same base color and configuration always
//! produce the same palette, and palettes can be generated concurrently.

// Formulas stay in the plain `a * b + c` form so rounding at .5 matches
// the published WCAG reference arithmetic.
#![allow(clippy::suboptimal_flops)]

pub mod accent;
pub mod config;
pub mod contrast;
pub mod css;
pub mod mood;
pub mod neutral;
pub mod palette;

pub use accent::{AccentResult, AccentSolver, adaptive_saturation, solve_accent};
pub use config::{ConfigError, PaletteConfig};
pub use contrast::{WcagLevel, contrast_ratio, relative_luminance, select_text_color};
pub use neutral::{Neutral, NeutralTones, Neutrals, generate_neutrals};
pub use palette::{Palette, Pair, Theme, generate_palette, generate_palette_with};
