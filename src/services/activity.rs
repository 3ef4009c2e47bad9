//! Activity classification operations

use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::error::AppResult;
use crate::formulas::ActivityLevel;
use crate::models::{ActivityClassification, ActivityClassificationCreate};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLevelInput {
    pub activity_level: String,
}

impl ActivityLevelInput {
    pub fn compute(&self) -> ActivityClassificationCreate {
        ActivityClassificationCreate {
            activity_level: self.activity_level.clone(),
            classification: ActivityLevel::from_str(&self.activity_level)
                .classification()
                .to_string(),
        }
    }
}

/// Classify and persist an activity level
pub async fn record_activity_classification(
    db: &Database,
    input: ActivityLevelInput,
) -> AppResult<ActivityClassification> {
    store_activity_classification(db, input.compute()).await
}

/// Persist caller-supplied values without recomputation
pub async fn store_activity_classification(
    db: &Database,
    data: ActivityClassificationCreate,
) -> AppResult<ActivityClassification> {
    let record = db
        .run(move |conn| ActivityClassification::create(conn, &data))
        .await?;
    tracing::info!(id = record.id, classification = %record.classification, "recorded activity classification");
    Ok(record)
}

pub async fn list_activity_classifications(
    db: &Database,
) -> AppResult<Vec<ActivityClassification>> {
    Ok(db.run(ActivityClassification::list).await?)
}
