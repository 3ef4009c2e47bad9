//! Macronutrient operations

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::db::Database;
use crate::error::AppResult;
use crate::formulas;
use crate::models::{Macronutrients, MacronutrientsCreate};

use super::validate::require_all_finite;

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacronutrientsInput {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub tdee: f64,
}

impl MacronutrientsInput {
    pub fn compute(&self) -> MacronutrientsCreate {
        let split = formulas::macros(self.tdee);
        MacronutrientsCreate {
            tdee: self.tdee,
            protein: split.protein,
            carbs: split.carbs,
            fats: split.fats,
        }
    }
}

/// Compute and persist the macronutrient split for a calorie target
pub async fn record_macronutrients(
    db: &Database,
    input: MacronutrientsInput,
) -> AppResult<Macronutrients> {
    let data = input.compute();
    store_macronutrients(db, data).await
}

/// Persist caller-supplied values without recomputation
pub async fn store_macronutrients(
    db: &Database,
    data: MacronutrientsCreate,
) -> AppResult<Macronutrients> {
    require_all_finite(&[
        ("tdee", data.tdee),
        ("protein", data.protein),
        ("carbs", data.carbs),
        ("fats", data.fats),
    ])?;

    let record = db.run(move |conn| Macronutrients::create(conn, &data)).await?;
    tracing::info!(id = record.id, tdee = record.tdee, "recorded macronutrients");
    Ok(record)
}

pub async fn list_macronutrients(db: &Database) -> AppResult<Vec<Macronutrients>> {
    Ok(db.run(Macronutrients::list).await?)
}
