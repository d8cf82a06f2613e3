use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::claims::{
    ClaimImportError, ClaimReviewError, RepositoryError, UnknownClaimStatus,
};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Catalog(CatalogError),
    Review(ClaimReviewError),
    NotFound(String),
    BadRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Review(err) => write!(f, "review error: {}", err),
            AppError::NotFound(what) => write!(f, "{} not found", what),
            AppError::BadRequest(message) => write!(f, "bad request: {}", message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Review(err) => Some(err),
            AppError::NotFound(_) | AppError::BadRequest(_) => None,
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::Review(ClaimReviewError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Review(ClaimReviewError::MissingReason) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Catalog(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Review(ClaimReviewError::Repository(_))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<ClaimImportError> for AppError {
    fn from(value: ClaimImportError) -> Self {
        Self::Catalog(CatalogError::Claims(value))
    }
}

impl From<ClaimReviewError> for AppError {
    fn from(value: ClaimReviewError) -> Self {
        Self::Review(value)
    }
}

impl From<RepositoryError> for AppError {
    fn from(value: RepositoryError) -> Self {
        Self::Review(ClaimReviewError::Repository(value))
    }
}

impl From<UnknownClaimStatus> for AppError {
    fn from(value: UnknownClaimStatus) -> Self {
        Self::BadRequest(value.to_string())
    }
}
