//! HTTP server wiring

use axum::{
    routing::{get, patch},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::Args;
use crate::routes;
use crate::store::{SharedStore, Store};
use crate::suggest::{FallbackSuggestions, SuggestionProvider};

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub suggestions: Arc<dyn SuggestionProvider>,
    /// 404 on unknown tree ids instead of serving the default tree
    pub strict_tree_ids: bool,
}

impl AppState {
    pub fn new(store: Store, suggestions: Arc<dyn SuggestionProvider>, args: &Args) -> Self {
        Self {
            store: store.shared(),
            suggestions,
            strict_tree_ids: args.strict_tree_ids,
        }
    }

    /// Seeded store with the built-in suggestion and default flags
    pub fn seeded() -> Self {
        Self {
            store: Store::seeded().shared(),
            suggestions: Arc::new(FallbackSuggestions),
            strict_tree_ids: false,
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/dashboard", get(routes::get_dashboard))
        .route("/skill-tree/available", get(routes::get_available_trees))
        .route("/skill-tree/:tree_id", get(routes::get_skill_tree))
        .route(
            "/skill-tree/:tree_id/nodes/:node_id",
            patch(routes::update_node_status),
        )
        .route("/health", get(routes::health))
        .route("/suggestion", get(routes::get_suggestion));

    Router::new()
        .route("/", get(routes::welcome))
        .nest("/api", api)
        .layer(axum::middleware::from_fn(crate::middleware::log_requests))
        .layer(cors)
        .with_state(state)
}

/// Serve on an already bound listener until ctrl-c
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Bind `addr` and serve
pub async fn run(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("StudyForge API listening on http://{}", listener.local_addr()?);
    serve(listener, state).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!(error = %e, "Could not listen for ctrl-c");
            std::future::pending::<()>().await
        }
    }
}
