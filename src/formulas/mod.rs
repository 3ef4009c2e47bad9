//! Formula module
//!
//! Pure, closed-form body and nutrition calculations. No function here fails:
//! nonsensical input yields a nonsensical (possibly infinite or negative) result.

pub mod activity;
pub mod body;
pub mod macronutrients;

pub use activity::{activity_multiplier, classify_activity, ActivityLevel, DEFAULT_MULTIPLIER};
pub use body::{bmi, bmr, ideal_weight, tdee, Sex, WeightRange};
pub use macronutrients::{macros, MacroSplit};
