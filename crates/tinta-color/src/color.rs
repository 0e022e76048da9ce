// SPDX-License-Identifier: MIT
//
// tinta color model: hex text, 8-bit RGB and integer HSL.
//
// Single-character variable names (r, g, b, h, s, l, c, x, m) are the
// standard convention in color science and are kept so the formulas read
// like their textbook forms.
//
// Conversion pipeline:
//
//   "#rrggbb" / "#rgb"  →  Rgb (u8 × 3)  ↔  Hsl (degrees, percent, percent)
//
// HSL components are integers. Every conversion into HSL rounds, so an
// RGB → HSL → RGB trip is lossy by a few units per channel at worst. The
// value types never hold an out-of-range component: `Rgb` uses `u8`, and
// `Hsl::new` wraps the hue and clamps saturation and lightness.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidColorFormat;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An sRGB color with 8-bit channels.
///
/// # Examples
///
/// ```
/// use tinta_color::Rgb;
///
/// let blue: Rgb = "#3366ff".parse().unwrap();
/// assert_eq!(blue, Rgb::new(0x33, 0x66, 0xff));
/// assert_eq!(blue.to_hex(), "#3366ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB` (the `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] if `s` matches neither form.
    pub fn from_hex(s: &str) -> Result<Self, InvalidColorFormat> {
        hex_to_rgb(s)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[inline]
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Channels normalized to 0.0–1.0.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = InvalidColorFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in the HSL cylinder with integer components.
///
/// - hue: degrees, always in `0..360`
/// - saturation: percent, always in `0..=100`
/// - lightness: percent, always in `0..=100`
///
/// `Display` renders the CSS functional form `hsl(h, s%, l%)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

impl Hsl {
    /// Build an HSL value, wrapping the hue modulo 360 and clamping
    /// saturation and lightness to `0..=100`.
    #[must_use]
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Self {
            h: h.rem_euclid(360) as u16,
            s: s.clamp(0, 100) as u8,
            l: l.clamp(0, 100) as u8,
        }
    }

    /// Hue in degrees, `0..360`.
    #[inline]
    #[must_use]
    pub const fn hue(self) -> u16 {
        self.h
    }

    /// Saturation in percent, `0..=100`.
    #[inline]
    #[must_use]
    pub const fn saturation(self) -> u8 {
        self.s
    }

    /// Lightness in percent, `0..=100`.
    #[inline]
    #[must_use]
    pub const fn lightness(self) -> u8 {
        self.l
    }

    /// Same saturation and lightness, hue rotated 180°.
    #[must_use]
    pub fn complement(self) -> Self {
        Self {
            h: complementary_hue(self.h),
            ..self
        }
    }

    /// Replace lightness (clamped to `0..=100`).
    #[must_use]
    pub fn with_lightness(self, l: i32) -> Self {
        Self::new(i32::from(self.h), i32::from(self.s), l)
    }

    /// Shift lightness by `delta` percentage points, clamped to `0..=100`.
    #[must_use]
    pub fn shift_lightness(self, delta: i32) -> Self {
        self.with_lightness(i32::from(self.l) + delta)
    }

    /// Attach an opacity (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Hsla {
        Hsla::new(self, alpha)
    }

    #[inline]
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ─── Hsla ────────────────────────────────────────────────────────────────────

/// An [`Hsl`] color with opacity, used for translucent lines (borders,
/// separators). Alpha lives only here; it never feeds back into the RGB
/// or contrast math.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hsla {
    hsl: Hsl,
    alpha: f32,
}

impl Hsla {
    #[must_use]
    pub fn new(hsl: Hsl, alpha: f32) -> Self {
        Self {
            hsl,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    #[inline]
    #[must_use]
    pub const fn hsl(self) -> Hsl {
        self.hsl
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f32 {
        self.alpha
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%, {})",
            self.hsl.h, self.hsl.s, self.hsl.l, self.alpha
        )
    }
}

// ─── Swatch ──────────────────────────────────────────────────────────────────

/// A color known in both spaces at once.
///
/// Palette roles need the HSL form for output and the RGB form for
/// luminance math. A swatch computes the missing side once, at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Swatch {
    pub hsl: Hsl,
    pub rgb: Rgb,
}

impl Swatch {
    /// Canonical white reference: `hsl(0, 0%, 100%)` / `#ffffff`.
    pub const WHITE: Self = Self {
        hsl: Hsl { h: 0, s: 0, l: 100 },
        rgb: Rgb::WHITE,
    };

    /// Canonical black reference: `hsl(0, 0%, 0%)` / `#000000`.
    pub const BLACK: Self = Self {
        hsl: Hsl { h: 0, s: 0, l: 0 },
        rgb: Rgb::BLACK,
    };

    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self {
            hsl,
            rgb: hsl_to_rgb(hsl),
        }
    }

    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hsl: rgb_to_hsl(rgb),
            rgb,
        }
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.hsl.fmt(f)
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Parse `#RGB` or `#RRGGBB` (the `#` is optional, digits are
/// case-insensitive). Shorthand digits are doubled: `#abc` is `#aabbcc`.
///
/// # Errors
///
/// Returns [`InvalidColorFormat`] for any other input, including
/// surrounding whitespace and the 4/8-digit alpha forms.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, InvalidColorFormat> {
    parse_hex(hex).ok_or_else(|| InvalidColorFormat::new(hex))
}

/// Parse hex text straight to HSL.
///
/// # Errors
///
/// Propagates [`InvalidColorFormat`] from [`hex_to_rgb`].
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, InvalidColorFormat> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

/// Convert RGB to integer HSL.
///
/// Saturation uses the closed form `chroma / (1 - |2l - 1|)`. Achromatic
/// colors (all channels equal) get hue 0 and saturation 0.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.to_unit();

    // Pick the dominant channel on the integer values so the sector
    // choice never depends on float equality.
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let hi = f64::from(max) / 255.0;
    let lo = f64::from(min) / 255.0;
    let l = f64::midpoint(hi, lo);

    if max == min {
        return Hsl::new(0, 0, to_percent(l));
    }

    let d = hi - lo;
    let s = d / (1.0 - (2.0 * l - 1.0).abs());

    let sector = if max == rgb.r {
        (g - b) / d + if rgb.g < rgb.b { 6.0 } else { 0.0 }
    } else if max == rgb.g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    // A red-dominant color just below 360° can round up to 360; Hsl::new
    // wraps it to 0.
    Hsl::new(round_i32(sector * 60.0), to_percent(s), to_percent(l))
}

/// Convert integer HSL to RGB.
///
/// Uses the chroma / secondary / offset construction with one case per
/// 60° hue sector; each channel is rounded to the nearest integer.
#[must_use]
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.h);
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match hsl.h {
        0..60 => (c, x, 0.0),
        60..120 => (x, c, 0.0),
        120..180 => (0.0, c, x),
        180..240 => (0.0, x, c),
        240..300 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Hue rotated half a turn, kept in `0..360`.
#[inline]
#[must_use]
pub const fn complementary_hue(h: u16) -> u16 {
    (h % 360 + 180) % 360
}

// ─── Gamma ───────────────────────────────────────────────────────────────────

/// Convert one sRGB component (0.0–1.0) to linear light.
///
/// Uses the WCAG 2.x breakpoint of 0.03928 rather than the IEC 0.04045;
/// no 8-bit channel value falls between the two, so the results agree
/// for every [`Rgb`].
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// 0.0–1.0 → 0–255, rounded half away from zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
fn to_percent(v: f64) -> i32 {
    round_i32(v * 100.0)
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn round_i32(v: f64) -> i32 {
    v.round() as i32
}

// ─── Tests ───────────────────────────────────────────────────────────────────
