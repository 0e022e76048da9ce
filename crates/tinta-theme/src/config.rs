//! Palette configuration and `name=value` setting directives.
//!
//! [`PaletteConfig::default`] reproduces the stock palette. Individual
//! values can be overridden with setting directives, the same way from a
//! command line or a config string:
//!
//! | Full name      | Abbrev | Type    | Range    | Default |
//! |----------------|--------|---------|----------|---------|
//! | `contrast`     | `ct`   | ratio   | 1–21     | 7       |
//! | `textfloor`    | `tf`   | ratio   | 1–21     | 4.5     |
//! | `step`         | `st`   | percent | 1–100    | 1       |
//! | `hoverstep`    | `hs`   | percent | 0–100    | 10      |
//! | `border`       | `bd`   | alpha   | 0–1      | 0.3     |
//! | `separator`    | `sep`  | alpha   | 0–1      | 0.1     |
//! | `neutralsat`   | `ns`   | percent | 0–100    | 5       |
//! | `neutrallight` | `nl`   | percent | 0–100    | 95      |
//! | `neutraldark`  | `nd`   | percent | 0–100    | 5       |

use std::error::Error;
use std::fmt;

use crate::accent::{AccentSolver, DEFAULT_TARGET_CONTRAST, START_LIGHTNESS};
use crate::neutral::NeutralTones;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Directive without `=`.
    MissingValue(String),
    /// Name is neither a full setting name nor an abbreviation.
    UnknownSetting(String),
    /// Value does not parse as a number of the setting's type.
    InvalidValue { name: String, value: String },
    /// Value parses but falls outside the setting's range.
    OutOfRange {
        name: &'static str,
        value: String,
        range: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(arg) => write!(f, "setting {arg:?} needs a value (name=value)"),
            Self::UnknownSetting(name) => write!(f, "unknown setting {name:?}"),
            Self::InvalidValue { name, value } => {
                write!(f, "invalid value {value:?} for setting {name}")
            }
            Self::OutOfRange { name, value, range } => {
                write!(f, "{name}={value} is out of range ({range})")
            }
        }
    }
}

impl Error for ConfigError {}

// ---------------------------------------------------------------------------
// Setting directives
// ---------------------------------------------------------------------------

/// One parsed `name=value` directive. The name is not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub name: String,
    pub value: String,
}

/// Parse a single `name=value` directive.
///
/// # Errors
///
/// [`ConfigError::MissingValue`] when there is no `=` or the name is empty.
pub fn parse_setting(arg: &str) -> Result<Setting, ConfigError> {
    match arg.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok(Setting {
            name: name.trim().to_string(),
            value: value.trim().to_string(),
        }),
        _ => Err(ConfigError::MissingValue(arg.to_string())),
    }
}

/// Parse whitespace- or comma-separated directives
/// (e.g. `"contrast=4.5, border=0.2"`).
///
/// # Errors
///
/// The first directive that fails [`parse_setting`].
pub fn parse_settings(args: &str) -> Result<Vec<Setting>, ConfigError> {
    args.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_setting)
        .collect()
}

// ---------------------------------------------------------------------------
// PaletteConfig
// ---------------------------------------------------------------------------

/// Every tunable of palette generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaletteConfig {
    /// Contrast each accent must reach against its neutral background.
    pub target_contrast: f64,
    /// Minimum contrast for the base color's text before falling back to
    /// pure white/black.
    pub text_floor: f64,
    /// Accent search step, percentage points.
    pub accent_step: u8,
    /// Lightness change for hover (+) and active (−) states.
    pub hover_step: u8,
    pub border_alpha: f32,
    pub separator_alpha: f32,
    pub neutral: NeutralTones,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            target_contrast: DEFAULT_TARGET_CONTRAST,
            text_floor: 4.5,
            accent_step: 1,
            hover_step: 10,
            border_alpha: 0.3,
            separator_alpha: 0.1,
            neutral: NeutralTones::default(),
        }
    }
}

impl PaletteConfig {
    /// Default configuration with a different accent target.
    #[must_use]
    pub fn with_target_contrast(target_contrast: f64) -> Self {
        Self {
            target_contrast,
            ..Self::default()
        }
    }

    /// The accent search this configuration describes.
    #[must_use]
    pub const fn accent_solver(&self) -> AccentSolver {
        AccentSolver {
            target_contrast: self.target_contrast,
            start_lightness: START_LIGHTNESS,
            step: self.accent_step,
        }
    }

    /// Apply one directive.
    ///
    /// # Errors
    ///
    /// Unknown names, unparsable values and out-of-range values. On error
    /// the configuration is left unchanged.
    pub fn apply(&mut self, setting: &Setting) -> Result<(), ConfigError> {
        let value = setting.value.as_str();

        match setting.name.as_str() {
            "contrast" | "ct" => self.target_contrast = parse_ratio("contrast", value)?,
            "textfloor" | "tf" => self.text_floor = parse_ratio("textfloor", value)?,
            "step" | "st" => self.accent_step = parse_percent("step", value, 1)?,
            "hoverstep" | "hs" => self.hover_step = parse_percent("hoverstep", value, 0)?,
            "border" | "bd" => self.border_alpha = parse_alpha("border", value)?,
            "separator" | "sep" => self.separator_alpha = parse_alpha("separator", value)?,
            "neutralsat" | "ns" => {
                self.neutral.saturation = parse_percent("neutralsat", value, 0)?;
            }
            "neutrallight" | "nl" => self.neutral.light = parse_percent("neutrallight", value, 0)?,
            "neutraldark" | "nd" => self.neutral.dark = parse_percent("neutraldark", value, 0)?,
            other => return Err(ConfigError::UnknownSetting(other.to_string())),
        }
        Ok(())
    }

    /// Apply directives in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// See [`PaletteConfig::apply`].
    pub fn apply_all<'a>(
        &mut self,
        settings: impl IntoIterator<Item = &'a Setting>,
    ) -> Result<(), ConfigError> {
        settings.into_iter().try_for_each(|s| self.apply(s))
    }

    /// Check every field against its range. Configurations built through
    /// [`PaletteConfig::apply`] always pass; this guards struct literals.
    ///
    /// # Errors
    ///
    /// The first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_ratio("contrast", self.target_contrast)?;
        check_ratio("textfloor", self.text_floor)?;
        if !(1..=100).contains(&self.accent_step) {
            return Err(out_of_range("step", &self.accent_step, "1-100"));
        }
        for (name, v) in [
            ("hoverstep", self.hover_step),
            ("neutralsat", self.neutral.saturation),
            ("neutrallight", self.neutral.light),
            ("neutraldark", self.neutral.dark),
        ] {
            if v > 100 {
                return Err(out_of_range(name, &v, "0-100"));
            }
        }
        check_alpha("border", self.border_alpha)?;
        check_alpha("separator", self.separator_alpha)?;
        Ok(())
    }

    /// Every setting with its current value, in table order.
    #[must_use]
    pub fn settings(&self) -> Vec<(&'static str, String)> {
        vec![
            ("contrast", self.target_contrast.to_string()),
            ("textfloor", self.text_floor.to_string()),
            ("step", self.accent_step.to_string()),
            ("hoverstep", self.hover_step.to_string()),
            ("border", self.border_alpha.to_string()),
            ("separator", self.separator_alpha.to_string()),
            ("neutralsat", self.neutral.saturation.to_string()),
            ("neutrallight", self.neutral.light.to_string()),
            ("neutraldark", self.neutral.dark.to_string()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Value parsing
// ---------------------------------------------------------------------------

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn out_of_range(
    name: &'static str,
    value: &impl fmt::Display,
    range: &'static str,
) -> ConfigError {
    ConfigError::OutOfRange {
        name,
        value: value.to_string(),
        range,
    }
}

fn check_ratio(name: &'static str, v: f64) -> Result<f64, ConfigError> {
    if (1.0..=21.0).contains(&v) {
        Ok(v)
    } else {
        Err(out_of_range(name, &v, "1-21"))
    }
}

fn check_alpha(name: &'static str, v: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(out_of_range(name, &v, "0-1"))
    }
}

fn parse_ratio(name: &'static str, value: &str) -> Result<f64, ConfigError> {
    let v: f64 = value.parse().map_err(|_| invalid(name, value))?;
    check_ratio(name, v)
}

fn parse_alpha(name: &'static str, value: &str) -> Result<f32, ConfigError> {
    let v: f32 = value.parse().map_err(|_| invalid(name, value))?;
    check_alpha(name, v)
}

fn parse_percent(name: &'static str, value: &str, min: u8) -> Result<u8, ConfigError> {
    let v: u8 = value.parse().map_err(|_| invalid(name, value))?;
    if v < min || v > 100 {
        let range = if min == 0 { "0-100" } else { "1-100" };
        return Err(out_of_range(name, &v, range));
    }
    Ok(v)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
