//! Body composition and energy expenditure
//!
//! BMI, Mifflin-St Jeor BMR, TDEE and the Hamwi-style ideal weight band.
//! Weights are in kilograms, heights in centimetres, energy in kcal/day.

use serde::Serialize;

/// Sex used by the sex-specific formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse a user-supplied gender string.
    ///
    /// Only "male" (any case) selects the male formulas; every other string,
    /// misspellings and empty input included, takes the female branch.
    pub fn from_str(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("male") {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

/// Reference height (cm) of the ideal weight formula
const IDEAL_WEIGHT_BASE_HEIGHT: f64 = 152.0;
/// kg added per cm above the reference height
const IDEAL_WEIGHT_KG_PER_CM: f64 = 0.9;

/// Ideal body weight band in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

/// Body mass index: weight / (height in metres)^2
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate (Mifflin-St Jeor)
pub fn bmr(weight_kg: f64, height_cm: f64, age: i64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Total daily energy expenditure
pub fn tdee(bmr: f64, multiplier: f64) -> f64 {
    bmr * multiplier
}

/// Ideal weight range for a height
pub fn ideal_weight(height_cm: f64, sex: Sex) -> WeightRange {
    let offset = IDEAL_WEIGHT_KG_PER_CM * (height_cm - IDEAL_WEIGHT_BASE_HEIGHT);
    let (min_base, max_base) = match sex {
        Sex::Male => (50.0, 62.0),
        Sex::Female => (45.5, 56.5),
    };

    WeightRange {
        min: min_base + offset,
        max: max_base + offset,
    }
}
