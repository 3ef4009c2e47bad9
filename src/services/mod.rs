//! Calculator operations
//!
//! Each operation validates its input, runs the formulas, persists the
//! result and returns the stored record. The REST handlers and the GraphQL
//! resolvers both call into here.

pub mod activity;
pub mod health_metrics;
pub mod ideal_weight;
pub mod macronutrients;
pub mod status;
mod validate;

pub use activity::{
    list_activity_classifications, record_activity_classification,
    store_activity_classification, ActivityLevelInput,
};
pub use health_metrics::{list_health_metrics, record_health_metrics, HealthMetricsInput};
pub use ideal_weight::{
    list_ideal_weights, record_ideal_weight, store_ideal_weight, IdealWeightInput,
};
pub use macronutrients::{
    list_macronutrients, record_macronutrients, store_macronutrients, MacronutrientsInput,
};
pub use status::{record_counts, RecordCounts, ServiceStatus, StatusTracker};
