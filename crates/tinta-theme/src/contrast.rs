//! WCAG relative luminance, contrast ratio and readable-text selection.
//!
//! The contrast ratio of two colors is
//!
//! ```text
//! (L_lighter + 0.05) / (L_darker + 0.05)
//! ```
//!
//! which ranges from 1:1 (identical) to 21:1 (black on white). Guidelines
//! ask for at least 4.5:1 for body text and 7:1 for enhanced contrast.

use tinta_color::{Rgb, Swatch, srgb_to_linear};

/// Compute the relative luminance of a color per WCAG 2.x.
///
/// Channels are linearized with the sRGB transfer curve and weighted
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let (r, g, b) = rgb.to_unit();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0], the same for either argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick whichever reference reads better on `color`.
///
/// `light` wins only with strictly higher contrast; an exact tie goes to
/// `dark`.
#[must_use]
pub fn select_text_color(color: Rgb, light: Swatch, dark: Swatch) -> Swatch {
    if contrast_ratio(color, light.rgb) > contrast_ratio(color, dark.rgb) {
        light
    } else {
        dark
    }
}

/// WCAG conformance level reached by a contrast ratio for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WcagLevel {
    /// Below 3:1.
    Fail,
    /// 3:1 — large text only.
    AaLarge,
    /// 4.5:1.
    Aa,
    /// 7:1.
    Aaa,
}

impl WcagLevel {
    #[must_use]
    pub const fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::AaLarge => "AA large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tinta_color::Hsl;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(relative_luminance(Rgb::BLACK).abs() < f64::EPSILON);
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgb::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_primaries_carry_their_weights() {
        assert!(approx_eq(relative_luminance(Rgb::new(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 255)), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_known_blue() {
        let lum = relative_luminance(Rgb::new(0x33, 0x66, 0xff));
        assert!(approx_eq(lum, 0.174_27, 1e-4), "Luminance: {lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_gray_on_white_meets_aa() {
        // #767676 is the lightest gray that passes AA on white.
        let ratio = contrast_ratio(Rgb::new(0x76, 0x76, 0x76), Rgb::WHITE);
        assert!(approx_eq(ratio, 4.54, 0.01), "Gray contrast: {ratio}");
    }

    // ── select_text_color ───────────────────────────────────────────

    #[test]
    fn dark_color_gets_light_text() {
        let text = select_text_color(Rgb::new(20, 20, 60), Swatch::WHITE, Swatch::BLACK);
        assert_eq!(text, Swatch::WHITE);
    }

    #[test]
    fn light_color_gets_dark_text() {
        let text = select_text_color(Rgb::new(250, 240, 200), Swatch::WHITE, Swatch::BLACK);
        assert_eq!(text, Swatch::BLACK);
    }

    #[test]
    fn tie_goes_to_dark_reference() {
        // Hue is irrelevant at zero saturation: both are #808080.
        let light = Swatch::from_hsl(Hsl::new(0, 0, 50));
        let dark = Swatch::from_hsl(Hsl::new(120, 0, 50));
        assert_eq!(light.rgb, dark.rgb);
        let text = select_text_color(Rgb::new(10, 10, 10), light, dark);
        assert_eq!(text, dark);
    }

    #[test]
    fn tinted_references_are_returned_verbatim() {
        let light = Swatch::from_hsl(Hsl::new(45, 5, 95));
        let dark = Swatch::from_hsl(Hsl::new(45, 5, 5));
        let text = select_text_color(Rgb::new(0x33, 0x66, 0xff), light, dark);
        assert_eq!(text, light);
    }

    // ── WcagLevel ───────────────────────────────────────────────────

    #[test]
    fn wcag_levels() {
        assert_eq!(WcagLevel::from_ratio(21.0), WcagLevel::Aaa);
        assert_eq!(WcagLevel::from_ratio(7.0), WcagLevel::Aaa);
        assert_eq!(WcagLevel::from_ratio(4.5), WcagLevel::Aa);
        assert_eq!(WcagLevel::from_ratio(3.2), WcagLevel::AaLarge);
        assert_eq!(WcagLevel::from_ratio(1.0), WcagLevel::Fail);
        assert!(WcagLevel::Aa > WcagLevel::AaLarge);
    }

    // ── Properties ──────────────────────────────────────────────────

    fn arb_rgb() -> impl Strategy<Value = Rgb> {
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgb::new(r, g, b))
    }

    proptest! {
        #[test]
        fn contrast_is_symmetric(a in arb_rgb(), b in arb_rgb()) {
            prop_assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
        }

        #[test]
        fn contrast_with_self_is_one(a in arb_rgb()) {
            prop_assert!(approx_eq(contrast_ratio(a, a), 1.0, 1e-12));
        }

        #[test]
        fn contrast_stays_in_wcag_range(a in arb_rgb(), b in arb_rgb()) {
            let ratio = contrast_ratio(a, b);
            prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {}", ratio);
        }

        #[test]
        fn luminance_in_unit_range(a in arb_rgb()) {
            let lum = relative_luminance(a);
            prop_assert!((0.0..=1.0 + 1e-12).contains(&lum), "luminance {}", lum);
        }

        #[test]
        fn selected_text_is_never_worse(a in arb_rgb()) {
            let text = select_text_color(a, Swatch::WHITE, Swatch::BLACK);
            let other = if text == Swatch::WHITE { Swatch::BLACK } else { Swatch::WHITE };
            prop_assert!(contrast_ratio(a, text.rgb) >= contrast_ratio(a, other.rgb));
        }
    }
}
