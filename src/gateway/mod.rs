use std::time::Duration;

use axum::http::StatusCode;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::errors::AppError;
use crate::models::ChatRequest;

/// HTTP client for the chat service. Successful JSON bodies are passed back
/// untouched so the gateway relays them verbatim.
#[derive(Clone, Debug)]
pub struct ChatServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ChatServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Unexpected(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST {base}/chat`
    pub async fn chat(&self, request: &ChatRequest) -> Result<Value, AppError> {
        let url = self.endpoint(&["chat"])?;
        debug!("Forwarding chat request to {url}");

        let response = self
            .client
            .post(url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| unavailable(&url, e))?;

        let status = upstream_status(response.status());
        if !status.is_success() {
            warn!("Chat service returned {status} for {url}");
            return Err(AppError::UpstreamError { status });
        }

        response.json::<Value>().await.map_err(|e| unavailable(&url, e))
    }

    /// `GET {base}/conversations/{id}`
    pub async fn conversation_messages(&self, conversation_id: &str) -> Result<Value, AppError> {
        let url = self.endpoint(&["conversations", conversation_id])?;
        debug!("Fetching conversation from {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| unavailable(&url, e))?;

        let status = upstream_status(response.status());
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::ConversationNotFound { id: conversation_id.to_string() });
        }
        if !status.is_success() {
            warn!("Chat service returned {status} for {url}");
            return Err(AppError::UpstreamError { status });
        }

        response.json::<Value>().await.map_err(|e| unavailable(&url, e))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| AppError::UpstreamUnavailable {
            url: self.base_url.clone(),
            message: format!("invalid base URL: {e}"),
        })?;
        url.path_segments_mut()
            .map_err(|_| AppError::UpstreamUnavailable {
                url: self.base_url.clone(),
                message: "base URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn unavailable(url: &Url, e: reqwest::Error) -> AppError {
    error!("Chat service request to {url} failed: {e}");
    AppError::UpstreamUnavailable { url: url.to_string(), message: e.to_string() }
}

fn upstream_status(status: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
}
