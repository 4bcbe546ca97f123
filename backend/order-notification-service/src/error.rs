use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use gerai_fcm_shared::FcmError;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Hard failures of the dispatch pipeline.
///
/// Soft conditions (unchanged status, missing recipient or device token)
/// never reach this type; they are modelled as `DispatchOutcome::Skipped`
/// and reported as success so the event source does not retry.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("push delivery failed: {0}")]
    Push(#[from] FcmError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!("order notification dispatch failed: {}", self);
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
