//! Browser UI
//!
//! Two static pages compiled into the binary: the calculator form and the
//! table of stored health metrics.

use axum::{response::Html, routing::get, Router};

use super::AppState;

const CALCULATOR_PAGE: &str = include_str!("../../assets/index.html");
const RECORDS_PAGE: &str = include_str!("../../assets/records.html");

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(calculator))
        .route("/records", get(records))
}

async fn calculator() -> Html<&'static str> {
    Html(CALCULATOR_PAGE)
}

async fn records() -> Html<&'static str> {
    Html(RECORDS_PAGE)
}
