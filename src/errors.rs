use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONVERSATION_NOT_FOUND: &str = "Conversation not found";
pub const CHAT_SERVICE_ERROR: &str = "Chat Service Error";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Top-level application error shared by the chat service and the gateway.
/// Every variant is terminal for the request that raised it.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Conversation errors ──────────────────────────────────────────────────
    #[error("Conversation '{id}' not found")]
    ConversationNotFound { id: String },

    // ── Upstream errors (gateway → chat service) ─────────────────────────────
    #[error("Chat service responded with status {status}")]
    UpstreamError { status: StatusCode },

    #[error("Chat service unavailable at {url}: {message}")]
    UpstreamUnavailable { url: String, message: String },

    // ── System errors ────────────────────────────────────────────────────────
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// JSON body of every error response: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::ConversationNotFound { .. })
    }

    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AppError::UpstreamError { .. } | AppError::UpstreamUnavailable { .. }
        )
    }

    /// Maps an error kind to the client-facing status and detail text.
    /// Internal context never leaks into the detail.
    pub fn status_and_detail(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::ConversationNotFound { .. } => {
                (StatusCode::NOT_FOUND, CONVERSATION_NOT_FOUND)
            }
            AppError::UpstreamError { status } => (*status, CHAT_SERVICE_ERROR),
            AppError::UpstreamUnavailable { .. } => (StatusCode::BAD_GATEWAY, CHAT_SERVICE_ERROR),
            AppError::Unexpected(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        (status, Json(ErrorBody { detail: detail.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::ConversationNotFound { id: "abc".into() };
        assert!(err.is_not_found());
        assert_eq!(
            err.status_and_detail(),
            (StatusCode::NOT_FOUND, "Conversation not found")
        );
    }

    #[test]
    fn upstream_status_is_mirrored() {
        let err = AppError::UpstreamError { status: StatusCode::SERVICE_UNAVAILABLE };
        assert!(err.is_upstream());
        assert_eq!(
            err.status_and_detail(),
            (StatusCode::SERVICE_UNAVAILABLE, "Chat Service Error")
        );
    }

    #[test]
    fn unreachable_upstream_is_bad_gateway() {
        let err = AppError::UpstreamUnavailable {
            url: "http://localhost:1".into(),
            message: "connection refused".into(),
        };
        assert_eq!(err.status_and_detail().0, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn unexpected_hides_internal_message() {
        let err = AppError::Unexpected("lock poisoned at store.rs".into());
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!detail.contains("store.rs"));
    }
}
