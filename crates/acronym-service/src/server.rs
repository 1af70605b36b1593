//! HTTP server setup with health check.
//!
//! Slack posts slash commands as form data to `/slack/acronym`; the same
//! handler is mounted at `/api/acronym`.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::info;

use acronym_source::GlossarySource;

use crate::error::ServiceError;
use crate::handler::SlashCommandHandler;
use crate::slack::{SlashCommandRequest, SlashCommandResponse};

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub handler: SlashCommandHandler,
}

impl AppState {
    pub fn new(source: Arc<dyn GlossarySource>) -> Self {
        Self {
            handler: SlashCommandHandler::new(source),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Slash command endpoint. Always 200 unless the pipeline fails.
async fn slash_command(
    State(state): State<AppState>,
    Form(request): Form<SlashCommandRequest>,
) -> Result<Json<SlashCommandResponse>, ServiceError> {
    info!(
        command = request.command.as_deref().unwrap_or(""),
        team_id = request.team_id.as_deref().unwrap_or(""),
        "Received slash command"
    );
    let response = state.handler.handle(&request).await?;
    Ok(Json(response))
}

/// Build the HTTP router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/slack/acronym", post(slash_command))
        .route("/api/acronym", post(slash_command))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new())
                .on_response(DefaultOnResponse::new()),
        )
}

/// Serve on an already bound listener until `shutdown_signal` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    source: Arc<dyn GlossarySource>,
    shutdown_signal: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(AppState::new(source));

    info!("HTTP server ready on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP server shutdown complete");
    Ok(())
}

/// Run the HTTP server with graceful shutdown support.
///
/// Accepts a shutdown signal future that, when resolved, stops accepting
/// connections and lets in-flight requests finish.
pub async fn run_server_with_shutdown<F>(
    addr: SocketAddr,
    source: Arc<dyn GlossarySource>,
    shutdown_signal: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    serve(listener, source, shutdown_signal).await
}
