//! Error mapping - domain failures to RFC 7807 response envelopes.

use posts_core::error::{DomainError, StoreError};
use posts_shared::{ErrorResponse, ProxyResponse};

/// Last-resort body if even the error document cannot be encoded.
const FALLBACK_INTERNAL_BODY: &str =
    r#"{"type":"about:blank","title":"Internal Server Error","status":500}"#;

/// Transport-level error, one variant per response status.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation errors: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Validation(_) => 422,
            AppError::Internal(_) => 500,
        }
    }

    /// Render the error as a response envelope.
    pub fn into_response(self) -> ProxyResponse {
        let status = self.status_code();
        let error = match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::Validation(errors) => ErrorResponse::validation(errors),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        ProxyResponse::json(status, &error)
            .unwrap_or_else(|_| ProxyResponse::raw(500, FALLBACK_INTERNAL_BODY))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EmptyBody => AppError::BadRequest(err.to_string()),
            DomainError::MissingParameter(_) => AppError::BadRequest(err.to_string()),
            DomainError::InvalidParameter { .. } => AppError::BadRequest(err.to_string()),
            DomainError::Validation(errors) => {
                tracing::debug!(?errors, "Request failed validation");
                AppError::Validation(errors)
            }
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Store(store) => store.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!("Store error: {}", err);
        AppError::Internal("Store error".to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("Response encoding failed: {err}"))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
