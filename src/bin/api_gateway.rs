use chat_platform::config::GatewayConfig;
use chat_platform::gateway::ChatServiceClient;
use chat_platform::{gateway_router, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = GatewayConfig::from_env();

    let client = ChatServiceClient::new(&config.chat_service_url, config.upstream_timeout)?;
    info!("Proxying chat requests to {}", client.base_url());
    let app = gateway_router(client);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API gateway listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
