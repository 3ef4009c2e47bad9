//! Application error type
//!
//! Shared by the REST handlers and the GraphQL resolvers. Store failures are
//! logged in full but only ever reported to callers as a generic server error.

use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::db::DbError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing, mistyped or non-finite input
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// JSON body of every REST error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl AppError {
    /// Machine-readable code, used in REST bodies and GraphQL extensions
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Database(_) | AppError::Internal(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to a client
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Database(_) | AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    fn log(&self) {
        match self {
            AppError::Validation(msg) => tracing::debug!("Rejected request: {}", msg),
            AppError::Database(e) => tracing::error!("Database error: {}", e),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        let body = ErrorBody {
            error: self.code(),
            message: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        self.log();
        let code = match self {
            AppError::Validation(_) => "VALIDATION",
            AppError::Database(_) | AppError::Internal(_) => "INTERNAL",
        };
        async_graphql::Error::new(self.public_message()).extend_with(|_, e| e.set("code", code))
    }
}
