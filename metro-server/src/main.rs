use metro_server::config::ServerConfig;
use metro_server::web::{AppState, create_router};
use metro_server::wmata::WmataClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    if config.wmata.source.is_mock() {
        info!(source = ?config.wmata.source, "Serving mock WMATA responses");
    }

    // Create WMATA client
    let client = WmataClient::new(config.wmata.clone()).expect("Failed to create WMATA client");

    // Build app state and router
    let state = AppState::new(client);
    let app = create_router(state);

    // Bind and serve
    let addr = config.addr();
    info!("Metro proxy listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health");
    info!("  GET  /station-list?LineCode=SV");
    info!("  GET  /station-information?StationCode=A15");
    info!("  GET  /station-hours?StationCode=K05");
    info!("  GET  /arrival-times?StationCode=K05");
    info!("  GET  /station-route?LineCode=SV");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
