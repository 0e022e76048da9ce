//! Palette assembly — one base color in, every UI role out.
//!
//! ```text
//! hex ──► Rgb ──► Hsl + luminance
//!                  │
//!                  ├─► neutrals (white / black, complementary tint)
//!                  ├─► accent on white, accent on black (contrast search)
//!                  ├─► base text, hover, active
//!                  └─► border / separator (accent + alpha)
//! ```
//!
//! The two background-conditioned variants are both computed; which one
//! is shown is the caller's choice via [`Theme`].

#[cfg(feature = "tracing")]
use tracing::debug;

use tinta_color::{Hsl, Hsla, InvalidColorFormat, Rgb, Swatch, hex_to_rgb};

use crate::accent::AccentResult;
use crate::config::PaletteConfig;
use crate::contrast::{contrast_ratio, relative_luminance, select_text_color};
use crate::neutral::{Neutral, generate_neutrals_with};

// ---------------------------------------------------------------------------
// Theme / Pair
// ---------------------------------------------------------------------------

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Theme {
    /// Light neutral background, dark neutral text.
    #[default]
    Light,
    /// Dark neutral background, light neutral text.
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Label for a control that switches away from this theme.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Theme",
            Self::Dark => "Light Theme",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// A value computed once per neutral background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pair<T> {
    /// For use on the light ("white") neutral.
    pub on_white: T,
    /// For use on the dark ("black") neutral.
    pub on_black: T,
}

impl<T> Pair<T> {
    /// The variant that sits on the theme's background.
    #[must_use]
    pub const fn for_theme(&self, theme: Theme) -> &T {
        match theme {
            Theme::Light => &self.on_white,
            Theme::Dark => &self.on_black,
        }
    }

    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Pair<U> {
        Pair {
            on_white: f(self.on_white),
            on_black: f(self.on_black),
        }
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The user's base color and its interactive states.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BaseColor {
    pub color: Swatch,
    pub luminance: f64,
    /// Readable text on `color`.
    pub text: Swatch,
    /// `color` lightened by the hover step.
    pub hover: Hsl,
    /// `color` darkened by the hover step.
    pub active: Hsl,
}

/// Translucent line colors derived from the accents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lines {
    pub border: Pair<Hsla>,
    pub separator: Pair<Hsla>,
}

/// A complete palette for one base color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    pub white: Neutral,
    pub black: Neutral,
    pub base: BaseColor,
    /// Complementary accents, one per neutral background.
    pub comp: Pair<AccentResult>,
    pub lines: Lines,
}

impl Palette {
    /// Build a palette from an already parsed base color.
    #[must_use]
    pub fn from_rgb(rgb: Rgb, config: &PaletteConfig) -> Self {
        let base = Swatch::from_rgb(rgb);
        let luminance = relative_luminance(rgb);
        let hue = base.hsl.hue();

        #[cfg(feature = "tracing")]
        debug!(base = %base.hsl, hex = %rgb, luminance, "generating palette");

        let neutrals = generate_neutrals_with(hue, config.neutral);

        let solver = config.accent_solver();
        let comp = Pair {
            on_white: solver.solve(hue, luminance, neutrals.white.color.rgb),
            on_black: solver.solve(hue, luminance, neutrals.black.color.rgb),
        };

        let text = base_text(rgb, neutrals.white.color, neutrals.black.color, config.text_floor);
        let step = i32::from(config.hover_step);

        let accents = comp.map(|accent| accent.hsl());
        let lines = Lines {
            border: accents.map(|hsl| hsl.with_alpha(config.border_alpha)),
            separator: accents.map(|hsl| hsl.with_alpha(config.separator_alpha)),
        };

        Self {
            white: neutrals.white,
            black: neutrals.black,
            base: BaseColor {
                color: base,
                luminance,
                text,
                hover: base.hsl.shift_lightness(step),
                active: base.hsl.shift_lightness(-step),
            },
            comp,
            lines,
        }
    }

    /// Contrast of the base text against the base color.
    #[must_use]
    pub fn base_text_contrast(&self) -> f64 {
        contrast_ratio(self.base.color.rgb, self.base.text.rgb)
    }

    /// The neutral used as background for `theme`.
    #[must_use]
    pub const fn background(&self, theme: Theme) -> &Neutral {
        match theme {
            Theme::Light => &self.white,
            Theme::Dark => &self.black,
        }
    }

    /// The neutral used as body text for `theme`.
    #[must_use]
    pub const fn foreground(&self, theme: Theme) -> &Neutral {
        match theme {
            Theme::Light => &self.black,
            Theme::Dark => &self.white,
        }
    }
}

/// Generate the default palette for a hex color.
///
/// # Errors
///
/// [`InvalidColorFormat`] if `hex` is not `#RGB` / `#RRGGBB`. No fallback
/// color is substituted.
pub fn generate_palette(hex: &str) -> Result<Palette, InvalidColorFormat> {
    generate_palette_with(hex, &PaletteConfig::default())
}

/// Generate a palette for a hex color with explicit settings.
///
/// # Errors
///
/// [`InvalidColorFormat`] if `hex` is not `#RGB` / `#RRGGBB`.
pub fn generate_palette_with(
    hex: &str,
    config: &PaletteConfig,
) -> Result<Palette, InvalidColorFormat> {
    let rgb = hex_to_rgb(hex)?;
    Ok(Palette::from_rgb(rgb, config))
}

/// Text for the base color: the better of the two neutrals, unless that
/// still misses `floor`, in which case the better of pure white and black.
fn base_text(rgb: Rgb, light: Swatch, dark: Swatch, floor: f64) -> Swatch {
    let text = select_text_color(rgb, light, dark);
    if contrast_ratio(rgb, text.rgb) >= floor {
        text
    } else {
        select_text_color(rgb, Swatch::WHITE, Swatch::BLACK)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
