//! Craft Simulator command-line client.

use anyhow::Context;
use clap::Parser;
use craft_simulator::cli::{self, Cli};
use craft_simulator::config::Config;
use craft_simulator::logging;
use simulator_client::SimulatorClient;
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    }
    .with_overrides(args.base_url.clone(), args.timeout_ms)?;

    logging::init(&config.logging.filter)?;
    debug!(base_url = %config.client.base_url, "configuration loaded");

    let client = SimulatorClient::new(config.client_config())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::run(&args.command, &client, &mut out).await
}
