//! Data models
//!
//! Rust structs representing database entities. Every entity is append-only
//! and independent of the others.

mod activity_classification;
mod health_metrics;
mod ideal_weight;
mod macronutrients;

pub use activity_classification::{ActivityClassification, ActivityClassificationCreate};
pub use health_metrics::{HealthMetrics, HealthMetricsCreate};
pub use ideal_weight::{IdealWeight, IdealWeightCreate};
pub use macronutrients::{Macronutrients, MacronutrientsCreate};

/// Creation timestamp in the format stored with every record
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
