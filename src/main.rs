use std::sync::Arc;

use bantuan_backend::config::Config;
use bantuan_backend::routes;
use bantuan_backend::state::AppState;
use tower_http::cors::CorsLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    if !config.remote_configured() {
        info!("AI Foundry not configured; chat will serve fallback responses");
    }

    let port = config.port;
    let state = Arc::new(AppState::new(config));

    // CORS open for the frontend.
    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("starting Bantuan Backend on port {port}");
    axum::serve(listener, app).await?;
    Ok(())
}
