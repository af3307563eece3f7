pub mod chat_routes;
pub mod gateway_routes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::gateway::ChatServiceClient;
use crate::service::chat_service::ChatService;

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Router for the chat service.
pub fn chat_service_router(svc: ChatService) -> Router {
    Router::new()
        .route("/health", get(chat_routes::health_handler))
        .route("/chat", post(chat_routes::chat_handler))
        .route("/conversations/{id}", get(chat_routes::get_conversation_handler))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(svc)
}

/// Router for the API gateway.
pub fn gateway_router(client: ChatServiceClient) -> Router {
    Router::new()
        .route("/health", get(gateway_routes::health_handler))
        .route("/chat", post(gateway_routes::chat_handler))
        .route(
            "/conversations/{id}/messages",
            get(gateway_routes::list_messages_handler),
        )
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}
