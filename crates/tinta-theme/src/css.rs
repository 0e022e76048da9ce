//! CSS custom properties for a palette.
//!
//! The presentation layer styles a page through nine variables. Four are
//! the same in both themes; the other five swap between the white-side
//! and black-side values.

use std::fmt;

use crate::palette::{Palette, Theme};

/// One `--name: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVariable {
    pub name: &'static str,
    pub value: String,
}

impl CssVariable {
    fn new(name: &'static str, value: &impl fmt::Display) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// The custom properties a stylesheet reads, in declaration order.
#[must_use]
pub fn css_variables(palette: &Palette, theme: Theme) -> Vec<CssVariable> {
    let base = &palette.base;
    vec![
        CssVariable::new("--primary-accent-color", &base.color),
        CssVariable::new("--primary-accent-text", &base.text),
        CssVariable::new("--hover-color", &base.hover),
        CssVariable::new("--active-color", &base.active),
        CssVariable::new("--background-color", &palette.background(theme).color),
        CssVariable::new("--text-color", &palette.foreground(theme).color),
        CssVariable::new("--secondary-accent-color", &palette.comp.for_theme(theme).hsl()),
        CssVariable::new("--border-color", palette.lines.border.for_theme(theme)),
        CssVariable::new("--separator-color", palette.lines.separator.for_theme(theme)),
    ]
}

/// A `:root { … }` block declaring every variable for one theme.
#[derive(Debug, Clone, Copy)]
pub struct RootBlock<'a> {
    pub palette: &'a Palette,
    pub theme: Theme,
}

impl fmt::Display for RootBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ":root {{")?;
        for var in css_variables(self.palette, self.theme) {
            writeln!(f, "  {}: {};", var.name, var.value)?;
        }
        writeln!(f, "}}")
    }
}

/// Render the variables as a `:root { … }` block.
#[must_use]
pub fn render_root_block(palette: &Palette, theme: Theme) -> String {
    RootBlock { palette, theme }.to_string()
}
