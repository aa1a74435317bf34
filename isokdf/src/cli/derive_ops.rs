//! Derive command

use isokdf_common::LoggingTransformer;
use isokdf_kdf::{
    DerivationConfig, HashAlgorithm, KdfBuilder, KdfError, KdfFunction, TraceEvent, log_trace,
};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Flags given to `isokdf derive`
#[derive(Debug, Clone, Default)]
pub struct DeriveArgs<'a> {
    /// Input octets, hex encoded
    pub input: &'a str,
    /// `--function`
    pub function: Option<KdfFunction>,
    /// `--hash`
    pub hash: Option<HashAlgorithm>,
    /// `--length`
    pub length: Option<i64>,
    /// `--counter-width`
    pub counter_width: Option<usize>,
    /// `--config`
    pub config: Option<&'a Path>,
}

/// Merge the config file (if any) with command-line overrides
///
/// # Errors
///
/// Returns the config file's read or parse error.
pub fn resolve_config(args: &DeriveArgs<'_>) -> Result<DerivationConfig, KdfError> {
    let mut config = match args.config {
        Some(path) => DerivationConfig::from_path(path)?,
        None => DerivationConfig::default(),
    };

    if let Some(function) = args.function {
        config.function = function;
    }
    if let Some(hash) = args.hash {
        config.hash = hash;
    }
    if let Some(length) = args.length {
        config.length = length;
    }
    if let Some(width) = args.counter_width {
        config.counter_width = width;
    }
    Ok(config)
}

/// Run `isokdf derive`; returns whether the derivation succeeded
pub async fn handle_derive(
    args: DeriveArgs<'_>,
    verbose: bool,
    use_json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let outcome = derive_hex(&args, verbose).await;

    match outcome {
        Ok((config, output)) => {
            if use_json {
                println!(
                    "{}",
                    json!({
                        "success": true,
                        "operation": "derive",
                        "function": config.function,
                        "hash": config.hash,
                        "length": config.length,
                        "output": output,
                    })
                );
            } else {
                println!("{output}");
            }
            Ok(true)
        }
        Err(e) => {
            if use_json {
                println!(
                    "{}",
                    json!({
                        "success": false,
                        "operation": "derive",
                        "kind": e.kind().as_str(),
                        "error": e.to_string(),
                    })
                );
                Ok(false)
            } else {
                Err(e.into())
            }
        }
    }
}

async fn derive_hex(
    args: &DeriveArgs<'_>,
    verbose: bool,
) -> Result<(DerivationConfig, String), KdfError> {
    let config = resolve_config(args)?;
    let length = config.validate()?;
    let input = hex::decode(args.input.trim())
        .map_err(|e| KdfError::invalid_config(format!("input is not valid hex: {e}")))?;

    let blocks = Arc::new(AtomicU64::new(0));
    let planned = Arc::clone(&blocks);
    let forward = verbose.then(log_trace);

    let builder = KdfBuilder::from_config(&config).with_trace(move |event| {
        if let TraceEvent::Plan { blocks, .. } = *event {
            planned.store(blocks, Ordering::Relaxed);
        }
        if let Some(forward) = &forward {
            forward(event);
        }
    });

    let function = config.function.name();
    let hash = config.hash.name();
    match builder.compute(input, length).await {
        Ok(key) => {
            LoggingTransformer::log_derivation(
                function,
                hash,
                length,
                blocks.load(Ordering::Relaxed),
            );
            Ok((config, key.to_hex()))
        }
        Err(e) => {
            LoggingTransformer::log_derivation_failure(function, hash, &e);
            Err(e)
        }
    }
}
