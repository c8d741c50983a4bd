//! Relay HTTP server — axum facade over the provider router

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use chrono::Utc;
use tower_http::cors::CorsLayer;
use tracing::info;

use astrobot_core::providers::{ProviderRouter, recommend};

use crate::error::ApiError;
use crate::protocol::{ChatRequest, ChatReply};

/// Shared state for all request handlers. The router is read-only after
/// startup; no per-request state outlives the request.
#[derive(Clone)]
pub struct RelayState {
    pub router: Arc<ProviderRouter>,
}

/// The relay server
pub struct RelayServer {
    state: RelayState,
    bind: SocketAddr,
}

impl RelayServer {
    /// Create a new relay server
    pub fn new(bind: SocketAddr, router: Arc<ProviderRouter>) -> Self {
        Self {
            state: RelayState { router },
            bind,
        }
    }

    /// Build the axum router. CORS stays permissive for the browser
    /// frontend.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/chat", post(chat_handler))
            .route("/providers", get(providers_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Start the server (blocks until shutdown)
    pub async fn run(self) -> anyhow::Result<()> {
        let bind = self.bind;
        let router = self.router();
        let listener = tokio::net::TcpListener::bind(bind).await?;
        info!("Relay listening on {}", bind);

        axum::serve(listener, router).await?;

        Ok(())
    }
}

// ── HTTP Handlers ──

async fn health_handler(State(state): State<RelayState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "providers": state.router.provider_names(),
    }))
}

async fn chat_handler(
    State(state): State<RelayState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let Ok(Json(request)) = body else {
        return Err(ApiError::BadRequest("Message is required".to_string()));
    };

    let Some(message) = request.message else {
        return Err(ApiError::BadRequest("Message is required".to_string()));
    };

    let message = message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("Message cannot be empty".to_string()));
    }

    info!("Received message: {}", message);

    let resolution = state.router.resolve(message).await;

    Ok(Json(ChatReply {
        response: resolution.text,
        provider: resolution.provider,
        status: resolution.status,
    }))
}

async fn providers_handler(State(state): State<RelayState>) -> impl IntoResponse {
    let health = state.router.health().await;
    let recommended = recommend(&health);

    let mut providers = serde_json::Map::new();
    for (name, reachable) in &health {
        providers.insert(name.to_string(), serde_json::Value::Bool(*reachable));
    }

    Json(serde_json::json!({
        "providers": providers,
        "recommended": recommended,
    }))
}
