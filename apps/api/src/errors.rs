use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is surfaced to the client as `{"detail": "<message>"}` with the
/// underlying message intact.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    /// Document extraction or language pipeline failure.
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Upstream(_)
            | AppError::Io(_)
            | AppError::Serialization(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::InvalidInput(format!("Malformed multipart body: {}", e.body_text()))
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Upstream(msg) => tracing::error!("Upstream error: {msg}"),
            AppError::Io(e) => tracing::error!("I/O error: {e}"),
            AppError::Serialization(e) => tracing::error!("Serialization error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            _ => tracing::warn!(status = status.as_u16(), "Request rejected: {self}"),
        }

        let body = Json(json!({ "detail": self.to_string() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidInput("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Upstream("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(AppError::from(io).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_detail_carries_raw_message() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert_eq!(AppError::from(io).to_string(), "disk full");
        assert_eq!(
            AppError::Upstream("PDF extraction failed: bad xref".into()).to_string(),
            "PDF extraction failed: bad xref"
        );
    }

    #[tokio::test]
    async fn test_response_body_is_flat_detail() {
        let response = AppError::NotFound("Resume data file not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "detail": "Resume data file not found" }));
    }
}
