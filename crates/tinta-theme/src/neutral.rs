//! Near-white and near-black anchors tinted toward the complementary hue.
//!
//! Pure gray extremes look disconnected from a saturated base color. A few
//! percent of the complementary hue ties the backgrounds to the palette
//! while keeping them close to the luminance extremes.

use tinta_color::{Hsl, Swatch, complementary_hue};

use crate::contrast::select_text_color;

/// Saturation and lightness of the two neutral anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NeutralTones {
    /// Tint strength, percent.
    pub saturation: u8,
    /// Lightness of the light ("white") neutral, percent.
    pub light: u8,
    /// Lightness of the dark ("black") neutral, percent.
    pub dark: u8,
}

impl Default for NeutralTones {
    fn default() -> Self {
        Self {
            saturation: 5,
            light: 95,
            dark: 5,
        }
    }
}

/// One neutral role: its color and the text color that reads on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Neutral {
    pub color: Swatch,
    /// Pure white or pure black, whichever contrasts more with `color`.
    pub text: Swatch,
}

impl Neutral {
    fn new(hsl: Hsl) -> Self {
        let color = Swatch::from_hsl(hsl);
        Self {
            color,
            text: select_text_color(color.rgb, Swatch::WHITE, Swatch::BLACK),
        }
    }
}

/// The light/dark neutral pair for one base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Neutrals {
    pub white: Neutral,
    pub black: Neutral,
}

/// Neutrals for `base_hue` with the default 5% tint at 95% / 5% lightness.
#[must_use]
pub fn generate_neutrals(base_hue: u16) -> Neutrals {
    generate_neutrals_with(base_hue, NeutralTones::default())
}

/// Neutrals for `base_hue` with explicit tones.
#[must_use]
pub fn generate_neutrals_with(base_hue: u16, tones: NeutralTones) -> Neutrals {
    let hue = i32::from(complementary_hue(base_hue));
    let s = i32::from(tones.saturation);
    Neutrals {
        white: Neutral::new(Hsl::new(hue, s, i32::from(tones.light))),
        black: Neutral::new(Hsl::new(hue, s, i32::from(tones.dark))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::relative_luminance;
    use pretty_assertions::assert_eq;
    use tinta_color::Rgb;

    #[test]
    fn neutrals_use_complementary_hue() {
        let n = generate_neutrals(225);
        assert_eq!(n.white.color.hsl, Hsl::new(45, 5, 95));
        assert_eq!(n.black.color.hsl, Hsl::new(45, 5, 5));
    }

    #[test]
    fn neutral_rgb_is_derived() {
        let n = generate_neutrals(225);
        assert_eq!(n.white.color.rgb, Rgb::new(243, 243, 242));
        assert_eq!(n.black.color.rgb, Rgb::new(13, 13, 12));
    }

    #[test]
    fn neutral_text_is_opposite_extreme() {
        let n = generate_neutrals(10);
        assert_eq!(n.white.text, Swatch::BLACK);
        assert_eq!(n.black.text, Swatch::WHITE);
    }

    #[test]
    fn neutrals_sit_near_the_extremes() {
        for hue in (0..360).step_by(15) {
            let n = generate_neutrals(hue);
            assert!(relative_luminance(n.white.color.rgb) > 0.85, "hue {hue}");
            assert!(relative_luminance(n.black.color.rgb) < 0.01, "hue {hue}");
        }
    }

    #[test]
    fn hue_wraps_past_180() {
        let n = generate_neutrals(300);
        assert_eq!(n.white.color.hsl.hue(), 120);
    }

    #[test]
    fn custom_tones() {
        let tones = NeutralTones {
            saturation: 10,
            light: 90,
            dark: 12,
        };
        let n = generate_neutrals_with(0, tones);
        assert_eq!(n.white.color.hsl, Hsl::new(180, 10, 90));
        assert_eq!(n.black.color.hsl, Hsl::new(180, 10, 12));
    }
}
