//! CLI entry point for counting clusters inside mask images

use clap::Parser;
use maskcount::QuantifyError;
use maskcount::io::cli::{BatchRunner, Cli};

fn main() -> maskcount::Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config()?;
    let total = config.dir_paths.len();

    let mut runner = BatchRunner::new(config, cli.should_show_progress());

    // Log lines go through the progress bars so they are not overdrawn
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(runner.log_writer())
        .init();

    let summary = runner.process()?;

    if summary.is_complete() {
        Ok(())
    } else {
        Err(QuantifyError::BatchIncomplete {
            failed: summary.directories_failed,
            total,
        })
    }
}
