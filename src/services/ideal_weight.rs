//! Ideal weight operations

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::db::Database;
use crate::error::AppResult;
use crate::formulas::{self, Sex};
use crate::models::{IdealWeight, IdealWeightCreate};

use super::validate::require_all_finite;

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealWeightInput {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub height: f64,
    pub gender: String,
}

impl IdealWeightInput {
    pub fn compute(&self) -> IdealWeightCreate {
        let range = formulas::ideal_weight(self.height, Sex::from_str(&self.gender));
        IdealWeightCreate {
            height: self.height,
            gender: self.gender.clone(),
            min_weight: range.min,
            max_weight: range.max,
        }
    }
}

/// Compute and persist the ideal weight band for a height and gender
pub async fn record_ideal_weight(db: &Database, input: IdealWeightInput) -> AppResult<IdealWeight> {
    let data = input.compute();
    store_ideal_weight(db, data).await
}

/// Persist caller-supplied values without recomputation
pub async fn store_ideal_weight(db: &Database, data: IdealWeightCreate) -> AppResult<IdealWeight> {
    require_all_finite(&[
        ("height", data.height),
        ("minWeight", data.min_weight),
        ("maxWeight", data.max_weight),
    ])?;

    let record = db.run(move |conn| IdealWeight::create(conn, &data)).await?;
    tracing::info!(id = record.id, "recorded ideal weight");
    Ok(record)
}

pub async fn list_ideal_weights(db: &Database) -> AppResult<Vec<IdealWeight>> {
    Ok(db.run(IdealWeight::list).await?)
}
