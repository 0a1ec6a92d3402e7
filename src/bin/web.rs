use std::{io, sync::Arc};
use tracing_subscriber::EnvFilter;

use summarize::{
    agent::SummaryAgent,
    config::ServerConfig,
    server
};

// full-stack variant: same summarize endpoint plus the browser
// front-end served from the static directory.
#[tokio::main]
async fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "summarize=info,tower_http=info".into()))
        .init();

    let config = ServerConfig::from_env("0.0.0.0");
    let agent = Arc::new(SummaryAgent::from_api_key(&config.api_key));
    let router = server::web_router(agent, &config.static_dir);
    server::run(router, &config).await
}
