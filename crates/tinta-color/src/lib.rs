// SPDX-License-Identifier: MIT
//
// tinta-color — color primitives for the tinta palette engine.
//
// Three representations of one color and the pure functions between them:
//
//   hex text ("#3366ff", "#36f")  →  Rgb  ↔  Hsl  (+ Hsla for translucency)
//
// Parsing is the only fallible step. It returns `InvalidColorFormat`
// rather than substituting a default color, and every conversion after it
// is total over its input type.

// HSL components are small integers; the casts are range-checked by
// clamping or `rem_euclid` right before they happen.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Formulas stay in the plain `a * b + c` form so rounding at .5 matches
// the published HSL and WCAG reference arithmetic.
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]

pub mod color;
pub mod error;

pub use color::{
    Hsl, Hsla, Rgb, Swatch, complementary_hue, hex_to_hsl, hex_to_rgb, hsl_to_rgb, rgb_to_hsl,
    srgb_to_linear,
};
pub use error::InvalidColorFormat;
