//! Read-only HTTP API over the knowledge graph.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::graph::{GraphClient, Statement};

#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<GraphClient>,
}

impl AppState {
    pub fn new(graph: GraphClient) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }
}

async fn health(State(state): State<AppState>) -> std::result::Result<&'static str, StatusCode> {
    state
        .graph
        .run(&[Statement::new("RETURN 1")])
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "graph health check failed");
            StatusCode::SERVICE_UNAVAILABLE
        })?;
    Ok("OK")
}

fn internal_error(what: &'static str) -> impl FnOnce(crate::error::PipelineError) -> StatusCode {
    move |e| {
        tracing::error!(error = %e, "failed to fetch {what}");
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub async fn list_regulation_numbers(
    State(state): State<AppState>,
) -> std::result::Result<Json<Vec<String>>, StatusCode> {
    tracing::debug!("fetching regulation numbers");
    let numbers = state
        .graph
        .regulation_numbers()
        .await
        .map_err(internal_error("regulation numbers"))?;
    Ok(Json(numbers))
}

pub async fn list_topics(
    State(state): State<AppState>,
) -> std::result::Result<Json<Vec<String>>, StatusCode> {
    tracing::debug!("fetching topics");
    let topics = state
        .graph
        .topic_names()
        .await
        .map_err(internal_error("topics"))?;
    Ok(Json(topics))
}

pub async fn list_forms(
    State(state): State<AppState>,
) -> std::result::Result<Json<Vec<String>>, StatusCode> {
    tracing::debug!("fetching legal forms");
    let forms = state
        .graph
        .legal_forms()
        .await
        .map_err(internal_error("legal forms"))?;
    Ok(Json(forms))
}

/// Build the API router. Unknown paths fall back to `static_dir` when given.
pub fn router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let app = Router::new()
        .route("/health", get(health))
        .route("/nomorPeraturan", get(list_regulation_numbers))
        .route("/topik", get(list_topics))
        .route("/bentukPeraturan", get(list_forms))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    }
}

/// Serve the API on `addr` until ctrl+c.
pub async fn serve(addr: SocketAddr, state: AppState, static_dir: Option<PathBuf>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, router(state, static_dir))
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("received SIGINT, shutting down");
            }
        })
        .await?;
    Ok(())
}
