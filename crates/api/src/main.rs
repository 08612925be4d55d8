use std::net::SocketAddr;
use std::sync::Arc;

use deckforge_planner::AssetCatalog;
use deckforge_slides::api::SlidesApi;
use deckforge_slides::config::SlidesConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deckforge_api::config::ServerConfig;
use deckforge_api::router::build_app_router;
use deckforge_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deckforge_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Remote slides client ---
    // Credentials are read once here and owned by the client for the
    // life of the process; nothing else sees them.
    let slides = Arc::new(SlidesApi::new(SlidesConfig::from_env()));
    tracing::info!("Slides API client created");

    // --- Asset catalog ---
    let assets = Arc::new(AssetCatalog::new(
        config.assets_dir.clone(),
        config.theme.clone(),
    ));
    tracing::info!(dir = %config.assets_dir.display(), "Asset catalog rooted");

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        slides,
        assets,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
