use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse, HealthResponse, Message};
use crate::service::chat_service::ChatService;

pub const SERVICE_NAME: &str = "chat-service";

/// GET `/health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(SERVICE_NAME))
}

/// POST `/chat` — runs one turn and returns the echoed reply
pub async fn chat_handler(
    State(svc): State<ChatService>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    info!("Received chat message ({} bytes)", request.content.len());
    svc.chat(request).await.map(Json)
}

/// GET `/conversations/{id}` — stored history in insertion order
pub async fn get_conversation_handler(
    Path(id): Path<String>,
    State(svc): State<ChatService>,
) -> Result<Json<Vec<Message>>, AppError> {
    svc.get_messages(&id).await.map(Json)
}
