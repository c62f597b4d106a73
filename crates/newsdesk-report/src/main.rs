//! Main entry point for the newsdesk report CLI.

use anyhow::{anyhow, Result};
use clap::Parser;
use newsdesk_common::init_logging;
use newsdesk_report::{load_config, run, Cli};
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(config.logging.to_logging_config())
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
    info!("Starting newsdesk report v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli, &config) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            error!("Report generation failed: {:#}", e);
            Err(e)
        }
    }
}
