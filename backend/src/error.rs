use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Missing required column: {column}")]
    MissingColumn { column: &'static str },

    #[error("Workbook has no worksheets")]
    NoWorksheet,

    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error(transparent)]
    Store(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = match self {
            AppError::Database(e) => {
                error!("database error: {}", e);
                "Database error occurred"
            }
            AppError::StoreUnavailable(e) => {
                error!("store unavailable: {}", e);
                "Store unavailable"
            }
            AppError::Config(msg) => {
                error!("configuration error: {}", msg);
                "Internal server error"
            }
        };

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message.to_string(),
        });

        (status, body).into_response()
    }
}
