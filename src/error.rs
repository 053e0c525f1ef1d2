// Error types: store-level failures and request-level errors mapped to HTTP responses

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure reading or writing the snapshot store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("decode {domain} snapshot: {source}")]
    Decode {
        domain: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid stored timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Backend temporarily unreachable (remote stores, tests).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Request-level error surfaced to API callers.
#[derive(Error, Debug)]
pub enum AuditError {
    /// Laboratory or equipment id does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Reference date malformed or after today.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Missing or malformed query or path parameter.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Inventory lookup failed; snapshot reads never surface here.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for AuditError {
    fn from(e: StoreError) -> Self {
        AuditError::UpstreamUnavailable(e.to_string())
    }
}

impl From<QueryRejection> for AuditError {
    fn from(rejection: QueryRejection) -> Self {
        AuditError::BadRequest(rejection.body_text())
    }
}

impl AuditError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuditError::NotFound(_) => StatusCode::NOT_FOUND,
            AuditError::InvalidDate(_)
            | AuditError::InvalidRange(_)
            | AuditError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AuditError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuditError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuditError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}
