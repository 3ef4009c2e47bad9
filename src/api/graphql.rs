//! GraphQL schema
//!
//! Query fields that take inputs compute and store a record, exactly like
//! their REST `POST` counterparts. The `create*` mutations other than
//! `createHealthMetrics` store caller-supplied values as given.

use async_graphql::{
    http::GraphiQLSource, Context, EmptySubscription, ErrorExtensions, Object, Result, Schema,
};
use axum::response::{Html, IntoResponse};

use crate::db::Database;
use crate::models::{
    ActivityClassification, ActivityClassificationCreate, HealthMetrics, IdealWeight,
    IdealWeightCreate, Macronutrients, MacronutrientsCreate,
};
use crate::services::{
    self, ActivityLevelInput, HealthMetricsInput, IdealWeightInput, MacronutrientsInput,
};

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(db: Database) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish()
}

/// GraphiQL explorer served on `GET /graphql`
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Compute and store BMI, BMR and TDEE
    async fn health_metrics(
        &self,
        ctx: &Context<'_>,
        age: i64,
        weight: f64,
        height: f64,
        gender: String,
        activity_level: String,
    ) -> Result<HealthMetrics> {
        let db = ctx.data::<Database>()?;
        let input = HealthMetricsInput {
            age,
            weight,
            height,
            gender,
            activity_level,
        };
        services::record_health_metrics(db, input)
            .await
            .map_err(|e| e.extend())
    }

    /// Compute and store the macronutrient split of a calorie target
    async fn macronutrients(&self, ctx: &Context<'_>, tdee: f64) -> Result<Macronutrients> {
        let db = ctx.data::<Database>()?;
        services::record_macronutrients(db, MacronutrientsInput { tdee })
            .await
            .map_err(|e| e.extend())
    }

    /// Compute and store the ideal weight band
    async fn ideal_weight(
        &self,
        ctx: &Context<'_>,
        height: f64,
        gender: String,
    ) -> Result<IdealWeight> {
        let db = ctx.data::<Database>()?;
        services::record_ideal_weight(db, IdealWeightInput { height, gender })
            .await
            .map_err(|e| e.extend())
    }

    /// Classify and store an activity level
    async fn activity_classification(
        &self,
        ctx: &Context<'_>,
        activity_level: String,
    ) -> Result<ActivityClassification> {
        let db = ctx.data::<Database>()?;
        services::record_activity_classification(db, ActivityLevelInput { activity_level })
            .await
            .map_err(|e| e.extend())
    }

    async fn get_health_metrics(&self, ctx: &Context<'_>) -> Result<Vec<HealthMetrics>> {
        let db = ctx.data::<Database>()?;
        services::list_health_metrics(db)
            .await
            .map_err(|e| e.extend())
    }

    async fn get_macronutrients(&self, ctx: &Context<'_>) -> Result<Vec<Macronutrients>> {
        let db = ctx.data::<Database>()?;
        services::list_macronutrients(db)
            .await
            .map_err(|e| e.extend())
    }

    async fn get_ideal_weights(&self, ctx: &Context<'_>) -> Result<Vec<IdealWeight>> {
        let db = ctx.data::<Database>()?;
        services::list_ideal_weights(db)
            .await
            .map_err(|e| e.extend())
    }

    async fn get_activity_classifications(
        &self,
        ctx: &Context<'_>,
    ) -> Result<Vec<ActivityClassification>> {
        let db = ctx.data::<Database>()?;
        services::list_activity_classifications(db)
            .await
            .map_err(|e| e.extend())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Compute and store BMI, BMR and TDEE
    async fn create_health_metrics(
        &self,
        ctx: &Context<'_>,
        age: i64,
        weight: f64,
        height: f64,
        gender: String,
        activity_level: String,
    ) -> Result<HealthMetrics> {
        let db = ctx.data::<Database>()?;
        let input = HealthMetricsInput {
            age,
            weight,
            height,
            gender,
            activity_level,
        };
        services::record_health_metrics(db, input)
            .await
            .map_err(|e| e.extend())
    }

    /// Store a pre-computed macronutrient split
    async fn create_macronutrients(
        &self,
        ctx: &Context<'_>,
        tdee: f64,
        protein: f64,
        carbs: f64,
        fats: f64,
    ) -> Result<Macronutrients> {
        let db = ctx.data::<Database>()?;
        let data = MacronutrientsCreate {
            tdee,
            protein,
            carbs,
            fats,
        };
        services::store_macronutrients(db, data)
            .await
            .map_err(|e| e.extend())
    }

    /// Store a pre-computed ideal weight band
    async fn create_ideal_weight(
        &self,
        ctx: &Context<'_>,
        height: f64,
        gender: String,
        min_weight: f64,
        max_weight: f64,
    ) -> Result<IdealWeight> {
        let db = ctx.data::<Database>()?;
        let data = IdealWeightCreate {
            height,
            gender,
            min_weight,
            max_weight,
        };
        services::store_ideal_weight(db, data)
            .await
            .map_err(|e| e.extend())
    }

    /// Store a caller-supplied activity classification
    async fn create_activity_classification(
        &self,
        ctx: &Context<'_>,
        activity_level: String,
        classification: String,
    ) -> Result<ActivityClassification> {
        let db = ctx.data::<Database>()?;
        let data = ActivityClassificationCreate {
            activity_level,
            classification,
        };
        services::store_activity_classification(db, data)
            .await
            .map_err(|e| e.extend())
    }
}
