#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! HTTP JSON front end for the admissions bot.
//!
//! `POST /chat` forwards `(user_id, message)` to the conversation manager
//! and relays the reply; `POST /reset` forgets a user's session.

mod handlers;
mod types;

pub use handlers::create_router;
pub use types::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse, ResetRequest, StatusResponse};

use axum::Router;
use nursebot_conversation::ConversationManager;
use nursebot_core::SessionStorage;
use nursebot_session::SessionManager;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub conversations: Arc<ConversationManager>,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            conversations: Arc::new(ConversationManager::new(storage)),
        }
    }

    /// State backed by a fresh in-memory session store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(SessionManager::new()))
    }
}

/// Router with CORS and request tracing applied.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("nursebot server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("nursebot server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}
