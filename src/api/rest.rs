//! REST endpoints
//!
//! `POST` on each path computes and stores a record; `GET` lists every
//! stored record of that kind.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use super::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ActivityClassification, HealthMetrics, IdealWeight, Macronutrients};
use crate::services::{
    self, ActivityLevelInput, HealthMetricsInput, IdealWeightInput, MacronutrientsInput,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/health-metrics",
            get(list_health_metrics).post(create_health_metrics),
        )
        .route(
            "/api/macronutrients",
            get(list_macronutrients).post(create_macronutrients),
        )
        .route(
            "/api/ideal-weight",
            get(list_ideal_weights).post(create_ideal_weight),
        )
        .route(
            "/api/activity-level",
            get(list_activity_classifications).post(create_activity_classification),
        )
        .route("/api/status", get(status))
        .route("/health", get(health))
}

/// Unwrap a JSON body, turning every extraction failure into a validation error
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

// ============================================================================
// Health Metrics
// ============================================================================

async fn create_health_metrics(
    State(state): State<AppState>,
    payload: Result<Json<HealthMetricsInput>, JsonRejection>,
) -> AppResult<Json<HealthMetrics>> {
    let input = body(payload)?;
    Ok(Json(services::record_health_metrics(&state.db, input).await?))
}

async fn list_health_metrics(State(state): State<AppState>) -> AppResult<Json<Vec<HealthMetrics>>> {
    Ok(Json(services::list_health_metrics(&state.db).await?))
}

// ============================================================================
// Macronutrients
// ============================================================================

async fn create_macronutrients(
    State(state): State<AppState>,
    payload: Result<Json<MacronutrientsInput>, JsonRejection>,
) -> AppResult<Json<Macronutrients>> {
    let input = body(payload)?;
    Ok(Json(services::record_macronutrients(&state.db, input).await?))
}

async fn list_macronutrients(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Macronutrients>>> {
    Ok(Json(services::list_macronutrients(&state.db).await?))
}

// ============================================================================
// Ideal Weight
// ============================================================================

async fn create_ideal_weight(
    State(state): State<AppState>,
    payload: Result<Json<IdealWeightInput>, JsonRejection>,
) -> AppResult<Json<IdealWeight>> {
    let input = body(payload)?;
    Ok(Json(services::record_ideal_weight(&state.db, input).await?))
}

async fn list_ideal_weights(State(state): State<AppState>) -> AppResult<Json<Vec<IdealWeight>>> {
    Ok(Json(services::list_ideal_weights(&state.db).await?))
}

// ============================================================================
// Activity Level
// ============================================================================

async fn create_activity_classification(
    State(state): State<AppState>,
    payload: Result<Json<ActivityLevelInput>, JsonRejection>,
) -> AppResult<Json<ActivityClassification>> {
    let input = body(payload)?;
    Ok(Json(
        services::record_activity_classification(&state.db, input).await?,
    ))
}

async fn list_activity_classifications(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ActivityClassification>>> {
    Ok(Json(services::list_activity_classifications(&state.db).await?))
}

// ============================================================================
// Status
// ============================================================================

async fn status(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.status.get_status(&state.db).await?))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::build_info::VERSION,
    }))
}
