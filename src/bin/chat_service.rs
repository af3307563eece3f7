use std::sync::Arc;

use chat_platform::agent::EchoAgent;
use chat_platform::config::ChatServiceConfig;
use chat_platform::db::InMemoryConversationStore;
use chat_platform::service::chat_service::ChatService;
use chat_platform::{chat_service_router, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = ChatServiceConfig::from_env();

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let store = Arc::new(InMemoryConversationStore::new());
    let chat_service = ChatService::new(store, EchoAgent::new());
    let app = chat_service_router(chat_service);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Chat service listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
