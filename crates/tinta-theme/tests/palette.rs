//! End-to-end palette properties over arbitrary base colors.

use proptest::prelude::*;
use tinta_color::{Hsl, Rgb, complementary_hue};
use tinta_theme::{
    AccentResult, PaletteConfig, Theme, contrast_ratio, css::css_variables, generate_palette,
    generate_palette_with,
};

fn assert_search_postcondition(accent: &AccentResult, background: Rgb, target: f64) {
    let measured = contrast_ratio(accent.rgb(), background);
    assert!((measured - accent.contrast).abs() < 1e-12);
    if accent.converged {
        assert!(accent.contrast >= target, "converged below target: {}", accent.contrast);
    } else {
        assert!(accent.contrast < target);
        let l = accent.hsl().lightness();
        assert!(l == 0 || l == 100, "gave up at lightness {l}");
    }
}

#[test]
fn reference_blue_palette() {
    let p = generate_palette("#3366ff").unwrap();

    assert!(p.base_text_contrast() >= 4.5, "text contrast {}", p.base_text_contrast());
    assert_search_postcondition(&p.comp.on_white, p.white.color.rgb, 7.0);
    assert_search_postcondition(&p.comp.on_black, p.black.color.rgb, 7.0);
    assert!(p.comp.on_white.converged && p.comp.on_black.converged);
}

#[test]
fn invalid_input_is_reported_not_replaced() {
    for bad in ["", "blue", "#12", "#1234567"] {
        assert!(generate_palette(bad).is_err(), "{bad:?} accepted");
    }
}

#[test]
fn relaxed_target_is_honored() {
    let config = PaletteConfig::with_target_contrast(4.5);
    let p = generate_palette_with("#e11d48", &config).unwrap();
    assert_search_postcondition(&p.comp.on_white, p.white.color.rgb, 4.5);
    assert_search_postcondition(&p.comp.on_black, p.black.color.rgb, 4.5);
}

#[test]
fn both_themes_expose_every_variable() {
    let p = generate_palette("#16a34a").unwrap();
    let light = css_variables(&p, Theme::Light);
    let dark = css_variables(&p, Theme::Dark);
    let names = |vars: &[tinta_theme::css::CssVariable]| -> Vec<&str> {
        vars.iter().map(|v| v.name).collect()
    };
    assert_eq!(names(&light), names(&dark));
    assert_ne!(light, dark);
}

fn arb_rgb() -> impl Strategy<Value = Rgb> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    #[test]
    fn any_color_yields_a_consistent_palette(rgb in arb_rgb()) {
        let p = generate_palette(&rgb.to_hex()).unwrap();
        let hue = p.base.color.hsl.hue();

        // Text on the base color always clears the AA floor.
        prop_assert!(p.base_text_contrast() >= 4.5);

        // Neutrals and accents share the complementary hue.
        let comp = complementary_hue(hue);
        prop_assert_eq!(p.white.color.hsl.hue(), comp);
        prop_assert_eq!(p.black.color.hsl.hue(), comp);
        prop_assert_eq!(p.comp.on_white.hsl().hue(), comp);
        prop_assert_eq!(p.comp.on_black.hsl().hue(), comp);

        assert_search_postcondition(&p.comp.on_white, p.white.color.rgb, 7.0);
        assert_search_postcondition(&p.comp.on_black, p.black.color.rgb, 7.0);

        // Lines reuse the accent color exactly.
        prop_assert_eq!(p.lines.border.on_white.hsl(), p.comp.on_white.hsl());
        prop_assert_eq!(p.lines.separator.on_black.hsl(), p.comp.on_black.hsl());

        // Hover/active keep hue and saturation.
        let base: Hsl = p.base.color.hsl;
        prop_assert_eq!(p.base.hover.hue(), base.hue());
        prop_assert_eq!(p.base.active.saturation(), base.saturation());
        prop_assert!(p.base.hover.lightness() >= base.lightness());
        prop_assert!(p.base.active.lightness() <= base.lightness());
    }
}
