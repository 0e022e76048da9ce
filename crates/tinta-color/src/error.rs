// SPDX-License-Identifier: MIT
//
// The one way color input can be wrong: the text is not a 3- or 6-digit
// hex triple. Everything downstream of parsing is total.

use std::error::Error;
use std::fmt;

/// A string that is neither `#RGB` nor `#RRGGBB` (the `#` is optional).
///
/// Carries the rejected input so callers can echo it back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColorFormat {
    input: String,
}

impl InvalidColorFormat {
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for InvalidColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color format {:?}: expected #RGB or #RRGGBB",
            self.input
        )
    }
}

impl Error for InvalidColorFormat {}
