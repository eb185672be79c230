use anyhow::Context;
use compound_interest::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env().context("Failed to load configuration")?;

    telemetry::init(&config)?;
    config.print_summary();

    server::run(config).await
}
