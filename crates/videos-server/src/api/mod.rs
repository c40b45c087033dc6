//! Router assembly and server lifecycle

use std::{future::IntoFuture, net::SocketAddr, sync::Arc, time::Duration};

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use tokio::signal;
use tracing::info;

use crate::{
    config::Config,
    error::{AppError, ServerResult},
    features, middleware,
    store::VideoStore,
};

/// Bind the configured address and serve until a shutdown signal
///
/// After Ctrl+C or SIGTERM, in-flight requests get up to the configured
/// shutdown timeout to finish.
pub async fn serve(config: &Config, store: Arc<VideoStore>) -> ServerResult<()> {
    let address = config.bind_address();
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid bind address '{address}': {e}")))?;

    let app = create_router(store, config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { address, source })?;
    info!("Server listening on {}", addr);

    let (signalled_tx, signalled_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    let timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let drain_deadline = async move {
        if signalled_rx.await.is_ok() {
            info!("Waiting up to {} seconds for connections to close", timeout.as_secs());
            tokio::time::sleep(timeout).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = server => result?,
        _ = drain_deadline => {
            tracing::warn!("Shutdown timeout elapsed with connections still open");
        },
    }

    info!("Server shut down gracefully");

    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_router(store: Arc<VideoStore>, config: &Config) -> Router {
    let feature_routes = features::router(store.clone());

    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .with_state(store);

    let router = match config.api.base_path.as_str() {
        "/" => router.merge(feature_routes),
        base => router.nest(base, feature_routes),
    };

    // Apply layers from innermost to outermost
    router
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Video API is working!",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health_check(State(store): State<Arc<VideoStore>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "videos": store.len(),
        })),
    )
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
