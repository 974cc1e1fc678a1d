//! Error responses for API handlers.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use roadsafe_core::{
    ContextError, ExportError, PetitionError, ProviderError, RouteRiskError, SamplingError,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// An external service failed or answered with something unusable
    #[error("{0}")]
    Upstream(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound(message) => ApiError::NotFound(message),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<SamplingError> for ApiError {
    fn from(err: SamplingError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<RouteRiskError> for ApiError {
    fn from(err: RouteRiskError) -> Self {
        match err {
            RouteRiskError::Sampling(err) => err.into(),
            RouteRiskError::Route(err) => err.into(),
        }
    }
}

impl From<PetitionError> for ApiError {
    fn from(err: PetitionError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ContextError> for ApiError {
    fn from(err: ContextError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
