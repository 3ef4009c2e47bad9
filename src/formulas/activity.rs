//! Activity levels
//!
//! Lookup of TDEE multipliers and descriptive classifications.

use serde::{Deserialize, Serialize};

/// Self-reported physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    SuperActive,
    /// Anything that isn't one of the five recognised levels
    Unknown,
}

/// Multiplier applied to unrecognised levels (same as sedentary)
pub const DEFAULT_MULTIPLIER: f64 = 1.2;

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::SuperActive,
    ];

    /// Parse a user-supplied level. Never fails; unrecognised input is `Unknown`.
    ///
    /// Case-insensitive, otherwise exact: `"very_active"` or `" sedentary "`
    /// are `Unknown`.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "lightly active" => ActivityLevel::LightlyActive,
            "moderately active" => ActivityLevel::ModeratelyActive,
            "very active" => ActivityLevel::VeryActive,
            "super active" => ActivityLevel::SuperActive,
            _ => ActivityLevel::Unknown,
        }
    }

    /// Canonical form as posted by the calculator UI
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly active",
            ActivityLevel::ModeratelyActive => "moderately active",
            ActivityLevel::VeryActive => "very active",
            ActivityLevel::SuperActive => "super active",
            ActivityLevel::Unknown => "unknown",
        }
    }

    /// TDEE multiplier for this level
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::SuperActive => 1.9,
            ActivityLevel::Unknown => DEFAULT_MULTIPLIER,
        }
    }

    /// Human-readable description of this level
    pub fn classification(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Lightly Active (light exercise/sports 1-3 days/week)",
            ActivityLevel::ModeratelyActive => {
                "Moderately Active (moderate exercise/sports 3-5 days/week)"
            }
            ActivityLevel::VeryActive => "Very Active (hard exercise/sports 6-7 days a week)",
            ActivityLevel::SuperActive => {
                "Super Active (very hard exercise/sports & a physical job)"
            }
            ActivityLevel::Unknown => "Unknown Activity Level",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ActivityLevel::Unknown)
    }
}

/// TDEE multiplier for a raw activity level string
pub fn activity_multiplier(level: &str) -> f64 {
    ActivityLevel::from_str(level).multiplier()
}

/// Descriptive classification for a raw activity level string
pub fn classify_activity(level: &str) -> &'static str {
    ActivityLevel::from_str(level).classification()
}
