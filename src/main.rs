use std::sync::Arc;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use maps_tool_adapter::config::Config;
use maps_tool_adapter::controller;
use maps_tool_adapter::repositories::maps_backend_repo::MapsBackendRepo;
use maps_tool_adapter::tools::maps_adapter::MapsAdapter;
use maps_tool_adapter::tools::registry::ToolRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!(
        "Starting maps tool adapter ({}) against backend {}",
        config.environment, config.maps_backend_url
    );

    let repo = MapsBackendRepo::new(&config.maps_backend_url, config.request_timeout())?;
    let adapter = Arc::new(MapsAdapter::new(repo, config.truncation_limits()));
    let registry = Arc::new(ToolRegistry::with_maps_tools(adapter));

    controller::serve(registry, &config).await
}
