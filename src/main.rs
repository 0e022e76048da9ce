// SPDX-License-Identifier: MIT
//
// tinta — accessible UI palettes from one base color.
//
// This is the command-line front end that wires the crates together:
//
//   tinta-color → hex parsing, RGB/HSL conversions
//   tinta-theme → contrast math, neutrals, accent search, palette, CSS
//
// One invocation is one palette:
//
//   args → Options → generate_palette_with → render (css | json | text) → stdout
//
// Diagnostics go to stderr through tracing; the filter comes from
// TINTA_LOG (default "warn", "debug" with -v).

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::io;
use std::process;

use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tinta_theme::config::{ConfigError, parse_setting};
use tinta_theme::css::{css_variables, render_root_block};
use tinta_theme::mood::HueMood;
use tinta_theme::{AccentResult, Palette, PaletteConfig, Theme, WcagLevel, generate_palette_with};

const USAGE: &str = "\
usage: tinta [OPTIONS] <HEX>

Generate an accessible palette from one base color (#RGB or #RRGGBB).

options:
  -t, --theme <light|dark>   theme for the CSS variables (default: light)
  -c, --contrast <RATIO>     accent contrast target, 1-21 (default: 7)
  -s, --set <NAME=VALUE>     override a palette setting (repeatable)
  -f, --format <FORMAT>      css | json | text (default: css)
      --show-config          print the effective settings and exit
  -v, --verbose              debug logging (overridden by TINTA_LOG)
  -h, --help                 show this help
";

// ─── Options ────────────────────────────────────────────────────────────────

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Format {
    #[default]
    Css,
    Json,
    Text,
}

impl Format {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "css" => Some(Self::Css),
            "json" => Some(Self::Json),
            "text" | "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Everything one run needs, parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
struct Options {
    color: Option<String>,
    theme: Theme,
    format: Format,
    config: PaletteConfig,
    verbose: bool,
    show_config: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            color: None,
            theme: Theme::Light,
            format: Format::Css,
            config: PaletteConfig::default(),
            verbose: false,
            show_config: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgError {
    Help,
    MissingColor,
    UnknownFlag(String),
    MissingValue(&'static str),
    InvalidValue { flag: &'static str, value: String },
    UnexpectedArgument(String),
    Config(ConfigError),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => f.write_str("help requested"),
            Self::MissingColor => f.write_str("missing base color"),
            Self::UnknownFlag(flag) => write!(f, "unknown option {flag}"),
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value {value:?} for {flag}"),
            Self::UnexpectedArgument(arg) => write!(f, "unexpected argument {arg:?}"),
            Self::Config(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ArgError {}

impl From<ConfigError> for ArgError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, ArgError> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(ArgError::Help),
            "-v" | "--verbose" => options.verbose = true,
            "--show-config" => options.show_config = true,
            "-t" | "--theme" => {
                let value = args.next().ok_or(ArgError::MissingValue("--theme"))?;
                options.theme = match value.as_str() {
                    "light" => Theme::Light,
                    "dark" => Theme::Dark,
                    _ => return Err(ArgError::InvalidValue { flag: "--theme", value }),
                };
            }
            "-c" | "--contrast" => {
                let value = args.next().ok_or(ArgError::MissingValue("--contrast"))?;
                options.config.apply(&parse_setting(&format!("contrast={value}"))?)?;
            }
            "-s" | "--set" => {
                let value = args.next().ok_or(ArgError::MissingValue("--set"))?;
                options.config.apply(&parse_setting(&value)?)?;
            }
            "-f" | "--format" => {
                let value = args.next().ok_or(ArgError::MissingValue("--format"))?;
                options.format = Format::parse(&value)
                    .ok_or(ArgError::InvalidValue { flag: "--format", value })?;
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(ArgError::UnknownFlag(arg));
            }
            _ if options.color.is_none() => options.color = Some(arg),
            _ => return Err(ArgError::UnexpectedArgument(arg)),
        }
    }

    if options.color.is_none() && !options.show_config {
        return Err(ArgError::MissingColor);
    }
    Ok(options)
}

// ─── Logging ────────────────────────────────────────────────────────────────

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("TINTA_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

// ─── Rendering ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonReport<'a> {
    theme: Theme,
    palette: &'a Palette,
    variables: BTreeMap<&'static str, String>,
}

fn render(palette: &Palette, options: &Options) -> Result<String, serde_json::Error> {
    Ok(match options.format {
        Format::Css => render_root_block(palette, options.theme),
        Format::Json => {
            let report = JsonReport {
                theme: options.theme,
                palette,
                variables: css_variables(palette, options.theme)
                    .into_iter()
                    .map(|v| (v.name, v.value))
                    .collect(),
            };
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            out
        }
        Format::Text => render_text(palette, options.theme),
    })
}

fn render_text(palette: &Palette, theme: Theme) -> String {
    TextReport { palette, theme }.to_string()
}

/// Human-readable summary: every color with its contrast and WCAG level.
struct TextReport<'a> {
    palette: &'a Palette,
    theme: Theme,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let palette = self.palette;
        let base = &palette.base;
        let text_contrast = palette.base_text_contrast();

        writeln!(f, "theme      {}", self.theme.as_str())?;
        writeln!(
            f,
            "base       {}  {}  luminance {:.3}",
            base.color.rgb, base.color.hsl, base.luminance
        )?;
        writeln!(
            f,
            "  text     {}  {:.2}:1 {}",
            base.text,
            text_contrast,
            WcagLevel::from_ratio(text_contrast).as_str()
        )?;
        writeln!(f, "  hover    {}", base.hover)?;
        writeln!(f, "  active   {}", base.active)?;
        writeln!(f, "white      {}  {}", palette.white.color.rgb, palette.white.color.hsl)?;
        writeln!(f, "black      {}  {}", palette.black.color.rgb, palette.black.color.hsl)?;
        write_accent(f, "on white", &palette.comp.on_white)?;
        write_accent(f, "on black", &palette.comp.on_black)?;
        writeln!(f, "border     {}", palette.lines.border.for_theme(self.theme))?;
        writeln!(f, "separator  {}", palette.lines.separator.for_theme(self.theme))?;

        match HueMood::for_hue(base.color.hsl.hue()) {
            Some(mood) => writeln!(f, "mood       {}: {}", mood.name(), mood.keywords().join(", ")),
            None => writeln!(f, "mood       -"),
        }
    }
}

fn write_accent(f: &mut fmt::Formatter<'_>, label: &str, accent: &AccentResult) -> fmt::Result {
    let status = if accent.converged {
        "converged"
    } else {
        "best effort"
    };
    writeln!(
        f,
        "accent {label}  {}  {}  {:.2}:1 {} ({status}, {} steps)",
        accent.rgb(),
        accent.hsl(),
        accent.contrast,
        accent.level().as_str(),
        accent.steps
    )
}

fn render_config(config: &PaletteConfig) -> String {
    config
        .settings()
        .into_iter()
        .map(|(name, value)| format!("{name}={value}\n"))
        .collect()
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(ArgError::Help) => {
            print!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("tinta: {e}");
            eprint!("{USAGE}");
            process::exit(2);
        }
    };

    init_logging(options.verbose);
    debug!(theme = options.theme.as_str(), format = ?options.format, "options parsed");

    if options.show_config {
        print!("{}", render_config(&options.config));
        return;
    }

    let color = options.color.as_deref().unwrap_or_default();
    let palette = generate_palette_with(color, &options.config).unwrap_or_else(|e| {
        eprintln!("tinta: {e}");
        process::exit(1);
    });

    match render(&palette, &options) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("tinta: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tinta_theme::generate_palette;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    // ── parse_args ────────────────────────────────────────────────────────

    #[test]
    fn bare_color_uses_defaults() {
        let options = parse_args(args(&["#3366ff"])).unwrap();
        assert_eq!(options.color.as_deref(), Some("#3366ff"));
        assert_eq!(options.theme, Theme::Light);
        assert_eq!(options.format, Format::Css);
        assert_eq!(options.config, PaletteConfig::default());
    }

    #[test]
    fn all_flags() {
        let options = parse_args(args(&[
            "-t", "dark", "--contrast", "4.5", "-s", "bd=0.2", "-f", "json", "-v", "36f",
        ]))
        .unwrap();
        assert_eq!(options.theme, Theme::Dark);
        assert_eq!(options.format, Format::Json);
        assert!(options.verbose);
        assert!((options.config.target_contrast - 4.5).abs() < f64::EPSILON);
        assert!((options.config.border_alpha - 0.2).abs() < f32::EPSILON);
        assert_eq!(options.color.as_deref(), Some("36f"));
    }

    #[test]
    fn help_and_missing_color() {
        assert_eq!(parse_args(args(&["--help"])), Err(ArgError::Help));
        assert_eq!(parse_args(args(&[])), Err(ArgError::MissingColor));
        assert!(parse_args(args(&["--show-config"])).is_ok());
    }

    #[test]
    fn bad_arguments() {
        assert_eq!(
            parse_args(args(&["--glow", "#fff"])),
            Err(ArgError::UnknownFlag("--glow".into()))
        );
        assert_eq!(
            parse_args(args(&["#fff", "--theme"])),
            Err(ArgError::MissingValue("--theme"))
        );
        assert_eq!(
            parse_args(args(&["#fff", "-t", "sepia"])),
            Err(ArgError::InvalidValue {
                flag: "--theme",
                value: "sepia".into()
            })
        );
        assert_eq!(
            parse_args(args(&["#fff", "#000"])),
            Err(ArgError::UnexpectedArgument("#000".into()))
        );
        assert!(matches!(
            parse_args(args(&["#fff", "-c", "30"])),
            Err(ArgError::Config(ConfigError::OutOfRange { .. }))
        ));
        assert!(matches!(
            parse_args(args(&["#fff", "-s", "glow=1"])),
            Err(ArgError::Config(ConfigError::UnknownSetting(_)))
        ));
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn css_output() {
        let palette = generate_palette("#3366ff").unwrap();
        let options = Options {
            theme: Theme::Dark,
            ..Options::default()
        };
        let out = render(&palette, &options).unwrap();
        assert!(out.contains("--background-color: hsl(45, 5%, 5%);"));
    }

    #[test]
    fn json_output() {
        let palette = generate_palette("#3366ff").unwrap();
        let options = Options {
            format: Format::Json,
            ..Options::default()
        };
        let out = render(&palette, &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["theme"], "Light");
        assert_eq!(value["variables"]["--secondary-accent-color"], "hsl(45, 71%, 23%)");
        assert_eq!(value["palette"]["comp"]["on_white"]["converged"], true);
        assert_eq!(value["palette"]["base"]["color"]["rgb"]["b"], 255);
    }

    #[test]
    fn text_output() {
        let palette = generate_palette("#3366ff").unwrap();
        let out = render_text(&palette, Theme::Light);
        assert!(out.contains("base       #3366ff  hsl(225, 100%, 60%)"));
        assert!(out.contains("accent on white  #644f11  hsl(45, 71%, 23%)"));
        assert!(out.contains("converged"));
        assert!(out.contains("mood       blue: trust"));
    }

    #[test]
    fn config_listing() {
        let out = render_config(&PaletteConfig::default());
        assert!(out.starts_with("contrast=7\n"));
        assert_eq!(out.lines().count(), 9);
    }
}
