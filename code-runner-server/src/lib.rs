use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use code_runner::{
    languages, CodeExecutionService, Config, ExecutionRequest, ExecutionResult, Language,
};
use serde::Serialize;
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Server error: {0}")]
    ServerError(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServerError::ServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub language: Language,
    pub needs_compilation: bool,
    /// Whether the toolchain was found on this host
    pub available: bool,
}

#[derive(Clone)]
pub struct AppState {
    service: Arc<CodeExecutionService>,
}

pub fn create_app(config: &Config) -> Router {
    let state = AppState {
        service: Arc::new(CodeExecutionService::new(config)),
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/languages", get(languages))
        .route("/execute", post(execute))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    info!("Starting code runner server on {}", addr);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::ServerError(e.to_string()))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::ServerError(e.to_string()))?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn languages() -> Json<Vec<LanguageInfo>> {
    Json(
        Language::ALL
            .into_iter()
            .map(|language| {
                let profile = languages::profile(language);
                LanguageInfo {
                    language,
                    needs_compilation: profile.needs_compilation(),
                    available: profile.is_available(),
                }
            })
            .collect(),
    )
}

/// Unknown languages and failed runs still answer 200 with `success: false`;
/// only a body that is not an `ExecutionRequest` is rejected.
async fn execute(
    State(state): State<AppState>,
    payload: Result<Json<ExecutionRequest>, JsonRejection>,
) -> Result<Json<ExecutionResult>, ServerError> {
    let Json(request) = payload.map_err(|e| {
        error!("Rejected execute request: {}", e);
        ServerError::InvalidRequest(e.body_text())
    })?;

    Ok(Json(state.service.execute(request).await))
}
