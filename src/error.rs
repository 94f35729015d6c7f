// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::oracle::OracleError;

pub const MISSING_API_KEY: &str = "API 키가 필요합니다.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{}", .0.body_text())]
    Rejected(#[from] JsonRejection),

    #[error(transparent)]
    Upstream(#[from] OracleError),
}

impl AppError {
    pub fn missing_api_key() -> Self {
        Self::InvalidRequest(MISSING_API_KEY.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Rejected(rejection) => rejection.status(),
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Upstream(err) = &self {
            tracing::warn!(error = %err, "completion request failed");
        }
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
