//! Command-line interface

pub mod commands;
pub mod derive_ops;
pub mod vector_ops;

pub use commands::{Cli, Commands, Preset};
pub use derive_ops::{DeriveArgs, handle_derive, resolve_config};
pub use vector_ops::handle_vectors;

/// Dispatch a parsed command line; returns whether the command succeeded
pub async fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Derive {
            input,
            function,
            hash,
            length,
            counter_width,
            config,
        } => {
            let args = DeriveArgs {
                input,
                function: *function,
                hash: *hash,
                length: *length,
                counter_width: *counter_width,
                config: config.as_deref(),
            };
            handle_derive(args, cli.verbose, cli.json).await
        }
        Commands::Vectors => handle_vectors(cli.json),
        Commands::Config { preset } => {
            println!("{}", preset.config().to_json()?);
            Ok(true)
        }
    }
}
