//! HTTP surface
//!
//! REST endpoints, the GraphQL endpoint and the browser UI, assembled into
//! one axum router sharing a single store handle.

pub mod graphql;
pub mod rest;
pub mod ui;

use async_graphql_axum::GraphQL;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::db::Database;
use crate::services::StatusTracker;

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub status: StatusTracker,
}

impl AppState {
    pub fn new(db: Database, status: StatusTracker) -> Self {
        Self { db, status }
    }
}

/// Build the complete application router
pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.db.clone());

    Router::new()
        .merge(rest::routes())
        .merge(ui::routes())
        .route(
            "/graphql",
            get(graphql::graphiql).post_service(GraphQL::new(schema)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
