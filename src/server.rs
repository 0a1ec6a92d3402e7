use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router
};
use serde_json::json;
use thiserror::Error;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer
};

use crate::{
    agent::{AgentError, SummaryAgent},
    config::ServerConfig,
    model::{SummarizeRequest, SummarizeResponse}
};

pub type ApiResult<T> = Result<T, ApiError>;

// the two failure classes the endpoint distinguishes: bad input before
// the model call, and anything that goes wrong during it.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Text cannot be empty.")]
    EmptyText,

    #[error("{0}")]
    Agent(#[from] AgentError)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmptyText => StatusCode::BAD_REQUEST,
            ApiError::Agent(_) => StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

// API-only variant: just the summarize route.
pub fn api_router(agent: Arc<SummaryAgent>) -> Router {
    Router::new()
        .route("/summarize", post(summarize))
        .with_state(agent)
}

// front-end variant: summarize route plus the static browser assets.
// `/` serves the index page verbatim, `/static` the css and friends.
pub fn web_router(agent: Arc<SummaryAgent>, static_dir: &str) -> Router {
    let index = ServeFile::new(format!("{}/index.html", static_dir));
    api_router(agent)
        .route_service("/", index)
        .nest_service("/static", ServeDir::new(static_dir))
}

async fn summarize(
    State(agent): State<Arc<SummaryAgent>>,
    Json(request): Json<SummarizeRequest>
) -> ApiResult<Json<SummarizeResponse>> {
    if request.text.trim().is_empty() {
        return Err(ApiError::EmptyText);
    }
    let summary = agent.summarize(&request.text).await?;
    Ok(Json(SummarizeResponse::new(summary)))
}

pub async fn run(router: Router, config: &ServerConfig) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router.layer(TraceLayer::new_for_http())).await
}
