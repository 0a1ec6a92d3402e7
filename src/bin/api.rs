use std::{io, sync::Arc};
use tracing_subscriber::EnvFilter;

use summarize::{
    agent::SummaryAgent,
    config::ServerConfig,
    server
};

// API-only service: POST /summarize, no front-end.
#[tokio::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "summarize=info,tower_http=info".into()))
        .init();

    let config = ServerConfig::from_env("localhost");
    let agent = Arc::new(SummaryAgent::from_api_key(&config.api_key));
    let router = server::api_router(agent);
    server::run(router, &config).await
}
