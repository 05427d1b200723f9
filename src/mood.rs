//! The closed mood enumeration and its ordinal scale.
//!
//! Moods are persisted and exported by their French label. The ordinal rank
//! (1 = most negative, 5 = most positive) drives statistics and charting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five moods a day can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "Stressé")]
    Stressed,
    #[serde(rename = "Fatigué")]
    Tired,
    #[serde(rename = "Moyen")]
    Average,
    #[serde(rename = "Bien")]
    Good,
    #[serde(rename = "Très bien")]
    VeryGood,
}

impl Mood {
    /// All moods in ascending rank order.
    pub const ALL: [Mood; 5] = [
        Mood::Stressed,
        Mood::Tired,
        Mood::Average,
        Mood::Good,
        Mood::VeryGood,
    ];

    /// Lowest rank on the scale.
    pub const MIN_RANK: u8 = 1;
    /// Highest rank on the scale.
    pub const MAX_RANK: u8 = 5;

    /// The label shown to users and written to storage and exports.
    pub fn label(self) -> &'static str {
        match self {
            Mood::Stressed => "Stressé",
            Mood::Tired => "Fatigué",
            Mood::Average => "Moyen",
            Mood::Good => "Bien",
            Mood::VeryGood => "Très bien",
        }
    }

    /// Ordinal rank, 1 (most negative) through 5 (most positive).
    pub fn rank(self) -> u8 {
        match self {
            Mood::Stressed => 1,
            Mood::Tired => 2,
            Mood::Average => 3,
            Mood::Good => 4,
            Mood::VeryGood => 5,
        }
    }

    /// Looks up the mood with the given rank.
    pub fn from_rank(rank: u8) -> Option<Mood> {
        Mood::ALL.iter().copied().find(|m| m.rank() == rank)
    }

    /// Whether this mood counts towards the positive percentage.
    pub fn is_positive(self) -> bool {
        self.rank() >= 4
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known mood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mood '{0}'. Expected one of: Stressé, Fatigué, Moyen, Bien, Très bien (or 1-5)")]
pub struct ParseMoodError(pub String);

impl FromStr for Mood {
    type Err = ParseMoodError;

    /// Accepts the label (any case), an accent-free alias, or the rank digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_lowercase();

        for mood in Mood::ALL {
            if mood.label().to_lowercase() == lowered {
                return Ok(mood);
            }
        }

        let mood = match lowered.as_str() {
            "stresse" | "1" => Mood::Stressed,
            "fatigue" | "2" => Mood::Tired,
            "moyen" | "3" => Mood::Average,
            "bien" | "4" => Mood::Good,
            "tres bien" | "tres-bien" | "tres_bien" | "tresbien" | "5" => Mood::VeryGood,
            _ => return Err(ParseMoodError(trimmed.to_string())),
        };
        Ok(mood)
    }
}
