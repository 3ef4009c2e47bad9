//! Macronutrient split
//!
//! Converts a daily calorie target into grams of protein, carbs and fat.

use serde::Serialize;

/// Share of calories from each macronutrient
pub const PROTEIN_SHARE: f64 = 0.30;
pub const CARBS_SHARE: f64 = 0.40;
pub const FATS_SHARE: f64 = 0.30;

/// Energy density in kcal per gram
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// 30/40/30 protein/carbs/fat split of `tdee` kcal
pub fn macros(tdee: f64) -> MacroSplit {
    MacroSplit {
        protein: tdee * PROTEIN_SHARE / KCAL_PER_G_PROTEIN,
        carbs: tdee * CARBS_SHARE / KCAL_PER_G_CARBS,
        fats: tdee * FATS_SHARE / KCAL_PER_G_FAT,
    }
}
