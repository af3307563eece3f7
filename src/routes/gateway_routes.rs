use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::gateway::ChatServiceClient;
use crate::models::{ChatRequest, HealthResponse};

pub const SERVICE_NAME: &str = "api-gateway";

/// GET `/health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(SERVICE_NAME))
}

/// POST `/chat` — proxied to the chat service, body relayed as-is
pub async fn chat_handler(
    State(client): State<ChatServiceClient>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<Value>, AppError> {
    info!("Proxying chat message to {}", client.base_url());
    client.chat(&request).await.map(Json)
}

/// GET `/conversations/{id}/messages` — proxied conversation lookup
pub async fn list_messages_handler(
    Path(id): Path<String>,
    State(client): State<ChatServiceClient>,
) -> Result<Json<Value>, AppError> {
    client.conversation_messages(&id).await.map(Json)
}
