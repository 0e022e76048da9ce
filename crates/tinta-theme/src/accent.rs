//! Adaptive complementary accent: walk lightness until the accent reads on
//! a given background.
//!
//! The accent keeps the complementary hue of the base color and a
//! saturation derived from the base luminance. Only lightness moves: away
//! from the background (darker on light backgrounds, lighter on dark ones)
//! one step at a time, starting from 50%.
//!
//! The walk is bounded by the lightness domain. When it reaches 0% or 100%
//! without meeting the target, the last candidate is returned as a
//! best-effort result with `converged == false` and the contrast it did
//! reach, so callers can tell the two outcomes apart.

#[cfg(feature = "tracing")]
use tracing::{trace, warn};

use tinta_color::{Hsl, Rgb, Swatch, complementary_hue};

use crate::contrast::{WcagLevel, contrast_ratio, relative_luminance};

/// Contrast an accent must reach against its background by default (AAA).
pub const DEFAULT_TARGET_CONTRAST: f64 = 7.0;

/// Lightness every search starts from, percent.
pub const START_LIGHTNESS: u8 = 50;

/// Hard cap on evaluated candidates: one per lightness percentage point.
const MAX_STEPS: u16 = 101;

/// Saturation for an accent derived from a base color of the given
/// luminance: `round(80 - 50 * luminance)`. Light bases get calmer accents
/// (about 30%), dark bases more vivid ones (about 80%).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn adaptive_saturation(luminance: f64) -> u8 {
    // Safe: clamp keeps the value in 0..=100 before truncation.
    (80.0 - luminance * 50.0).round().clamp(0.0, 100.0) as u8
}

/// Which way the search moves lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    /// Light background: decrease lightness.
    Darken,
    /// Dark background: increase lightness.
    Lighten,
}

impl SearchDirection {
    /// Backgrounds brighter than 0.5 luminance are light; exactly 0.5
    /// counts as dark.
    #[must_use]
    pub const fn for_background(luminance: f64) -> Self {
        if luminance > 0.5 {
            Self::Darken
        } else {
            Self::Lighten
        }
    }

    const fn signum(self) -> i32 {
        match self {
            Self::Darken => -1,
            Self::Lighten => 1,
        }
    }
}

/// Outcome of one accent search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AccentResult {
    /// The last candidate evaluated. Its lightness is the one measured.
    pub color: Swatch,
    /// Contrast of `color` against the background.
    pub contrast: f64,
    /// Whether `contrast` reached the target.
    pub converged: bool,
    /// Number of candidates evaluated (at least 1).
    pub steps: u16,
}

impl AccentResult {
    #[inline]
    #[must_use]
    pub const fn hsl(&self) -> Hsl {
        self.color.hsl
    }

    #[inline]
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.color.rgb
    }

    #[must_use]
    pub const fn level(&self) -> WcagLevel {
        WcagLevel::from_ratio(self.contrast)
    }
}

/// Search parameters. `Default` is target 7:1, start 50%, step 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentSolver {
    pub target_contrast: f64,
    pub start_lightness: u8,
    /// Percentage points per step; 0 is treated as 1.
    pub step: u8,
}

impl Default for AccentSolver {
    fn default() -> Self {
        Self {
            target_contrast: DEFAULT_TARGET_CONTRAST,
            start_lightness: START_LIGHTNESS,
            step: 1,
        }
    }
}

impl AccentSolver {
    #[must_use]
    pub fn with_target(target_contrast: f64) -> Self {
        Self {
            target_contrast,
            ..Self::default()
        }
    }

    /// Find an accent for a base color (`base_hue`, `base_luminance`) that
    /// reaches the target contrast against `background`.
    #[must_use]
    pub fn solve(&self, base_hue: u16, base_luminance: f64, background: Rgb) -> AccentResult {
        let hue = i32::from(complementary_hue(base_hue));
        let saturation = i32::from(adaptive_saturation(base_luminance));
        let direction = SearchDirection::for_background(relative_luminance(background));
        let delta = direction.signum() * i32::from(self.step.max(1));

        let mut lightness = i32::from(self.start_lightness.min(100));
        let mut steps = 0;
        let result = loop {
            let color = Swatch::from_hsl(Hsl::new(hue, saturation, lightness));
            let contrast = contrast_ratio(color.rgb, background);
            steps += 1;

            if contrast >= self.target_contrast {
                break AccentResult { color, contrast, converged: true, steps };
            }

            // The last step is clamped so 0% and 100% are always tried.
            let next = (lightness + delta).clamp(0, 100);
            if next == lightness || steps >= MAX_STEPS {
                break AccentResult { color, contrast, converged: false, steps };
            }
            lightness = next;
        };

        #[cfg(feature = "tracing")]
        log_outcome(&result, background, self.target_contrast);

        result
    }
}

/// Solve with the default start and step.
#[must_use]
pub fn solve_accent(
    base_hue: u16,
    base_luminance: f64,
    background: Rgb,
    target_contrast: f64,
) -> AccentResult {
    AccentSolver::with_target(target_contrast).solve(base_hue, base_luminance, background)
}

#[cfg(feature = "tracing")]
fn log_outcome(result: &AccentResult, background: Rgb, target: f64) {
    if result.converged {
        trace!(
            accent = %result.color.hsl,
            background = %background,
            contrast = result.contrast,
            steps = result.steps,
            "accent search converged"
        );
    } else {
        warn!(
            accent = %result.color.hsl,
            background = %background,
            contrast = result.contrast,
            target,
            "accent search hit the lightness boundary below target"
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
