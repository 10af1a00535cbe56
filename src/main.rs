//! Entry point: parse CLI and dispatch the requested operation.

use anyhow::Context;
use clap::Parser;
use nfl_data_bridge::{
    cli::Bridge, commands::run_operation, logging::init_logging, NflverseSource, SourceConfig,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Bridge::parse();
    init_logging(app.verbose);

    let mut config = SourceConfig::from_env().with_refresh(app.refresh);
    if app.no_cache {
        config = config.without_cache();
    }

    let source = NflverseSource::new(config).context("Failed to set up the nflverse source")?;
    let output = run_operation(&source, app.operation, &app.params)
        .await
        .with_context(|| format!("{} failed", app.operation))?;

    println!("{output}");
    Ok(())
}
