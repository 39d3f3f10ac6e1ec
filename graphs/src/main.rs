mod config;
mod runner;

use crate::config::GraphsConfig;
use crate::runner::GraphsRunner;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GraphsConfig::from_env();
    info!(
        "Generating benchmark graphs from result directory '{}' (TCP link speed: {} Gbps)",
        config.result_directory.display(),
        config.tcp_link_speed_gbps
    );
    GraphsRunner::new(config).run()?;
    info!("Finished generating benchmark graphs.");
    Ok(())
}
