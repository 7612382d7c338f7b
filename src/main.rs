use anyhow::Result;
use tracing::info;
use user_service::{api, config, directory::Directory, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = config::load()?;
    telemetry::init(&cfg)?;

    info!("Starting user service v{}", env!("CARGO_PKG_VERSION"));

    let directory = Directory::seeded();
    info!(users = directory.len(), "User directory initialized");

    api::serve(cfg, directory).await
}
