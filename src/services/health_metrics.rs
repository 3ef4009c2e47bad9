//! Health metrics operations
//!
//! BMI, BMR and TDEE from age, weight, height, gender and activity level.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::db::Database;
use crate::error::AppResult;
use crate::formulas::{self, ActivityLevel, Sex};
use crate::models::{HealthMetrics, HealthMetricsCreate};

use super::validate::require_all_finite;

/// Raw body inputs. Numbers may also arrive as numeric strings.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetricsInput {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub age: i64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub weight: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub height: f64,
    pub gender: String,
    pub activity_level: String,
}

impl HealthMetricsInput {
    pub fn validate(&self) -> AppResult<()> {
        require_all_finite(&[("weight", self.weight), ("height", self.height)])
    }

    /// Derive BMI, BMR and TDEE for these inputs
    pub fn compute(&self) -> HealthMetricsCreate {
        let sex = Sex::from_str(&self.gender);
        let level = ActivityLevel::from_str(&self.activity_level);

        let bmi = formulas::bmi(self.weight, self.height);
        let bmr = formulas::bmr(self.weight, self.height, self.age, sex);
        let tdee = formulas::tdee(bmr, level.multiplier());

        HealthMetricsCreate {
            age: self.age,
            weight: self.weight,
            height: self.height,
            gender: self.gender.clone(),
            activity_level: self.activity_level.clone(),
            bmi,
            bmr,
            tdee,
        }
    }
}

/// Derived values must be finite to be stored; weight 0 with height 0 gives a NaN BMI
fn require_finite_results(data: &HealthMetricsCreate) -> AppResult<()> {
    require_all_finite(&[("bmi", data.bmi), ("bmr", data.bmr), ("tdee", data.tdee)])
}

/// Compute and persist a health metrics record
pub async fn record_health_metrics(
    db: &Database,
    input: HealthMetricsInput,
) -> AppResult<HealthMetrics> {
    input.validate()?;
    let data = input.compute();
    require_finite_results(&data)?;

    if !ActivityLevel::from_str(&data.activity_level).is_known() {
        tracing::debug!(
            activity_level = %data.activity_level,
            "unrecognised activity level, using default multiplier"
        );
    }

    let record = db.run(move |conn| HealthMetrics::create(conn, &data)).await?;
    tracing::info!(id = record.id, bmi = record.bmi, tdee = record.tdee, "recorded health metrics");
    Ok(record)
}

/// All stored health metrics records
pub async fn list_health_metrics(db: &Database) -> AppResult<Vec<HealthMetrics>> {
    Ok(db.run(HealthMetrics::list).await?)
}
