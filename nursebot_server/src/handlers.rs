//! HTTP request handlers

use super::AppState;
use super::types::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, ResetRequest, StatusResponse,
};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use nursebot_conversation::ConversationError;
use tracing::info;
use uuid::Uuid;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .route("/reset", post(reset))
        .route("/health", get(health))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let user_id = request
        .user_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string());

    info!("[{user_id}] Message: {}", request.message);

    let result = state
        .conversations
        .respond(&user_id, &request.message)
        .await?;

    Ok(Json(ChatResponse {
        response: result.response,
        user_id,
    }))
}

async fn reset(
    State(state): State<AppState>,
    Json(request): Json<ResetRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    if let Some(user_id) = request.user_id.filter(|id| !id.is_empty()) {
        state.conversations.reset(&user_id).await?;
    }
    Ok(Json(StatusResponse::success()))
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let sessions = state.conversations.list_sessions().await?.len();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        sessions,
    }))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    Internal(String),
}

impl From<ConversationError> for AppError {
    fn from(err: ConversationError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        tracing::error!("Request failed: {message}");
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
