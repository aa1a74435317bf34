//! Main entry point for the isokdf CLI

use clap::Parser;
use isokdf::cli::{Cli, run};
use isokdf_common::LoggingTransformer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize structured logging
    if cli.verbose {
        LoggingTransformer::init_with_default("debug");
    } else {
        LoggingTransformer::init();
    }

    if !run(cli).await? {
        std::process::exit(1);
    }
    Ok(())
}
