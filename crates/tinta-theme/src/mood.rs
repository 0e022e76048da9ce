//! Color-psychology keywords by hue family.
//!
//! Purely descriptive; nothing in palette generation depends on it.

/// Hue family with an associated mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HueMood {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl HueMood {
    /// Family for a hue in degrees. Purples and magentas (271°–359°) have
    /// no entry.
    #[must_use]
    pub const fn for_hue(hue: u16) -> Option<Self> {
        Some(match hue % 360 {
            0..=15 => Self::Red,
            16..=40 => Self::Orange,
            41..=65 => Self::Yellow,
            66..=165 => Self::Green,
            166..=270 => Self::Blue,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Red => &[
                "energy", "passion", "strength", "confidence", "danger", "alert", "love",
                "seduction", "tradition", "culture",
            ],
            Self::Orange => &[
                "energy", "dynamism", "warmth", "friendliness", "creativity", "originality",
                "attraction",
            ],
            Self::Yellow => &[
                "optimism", "joy", "creativity", "intellect", "energy", "activity", "attention",
                "alert", "warmth", "friendliness",
            ],
            Self::Green => &[
                "nature", "freshness", "health", "well-being", "stability", "permission",
                "creativity", "growth",
            ],
            Self::Blue => &[
                "trust", "reliability", "calm", "serenity", "intelligence", "professionalism",
                "freedom", "inspiration", "coldness", "distance",
            ],
        }
    }
}
