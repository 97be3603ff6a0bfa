use std::{env, io};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use verification_calldata::{encode, load_record};

use crate::config::{CliConfig, LoggingFormat};

mod config;

fn init_logging(format: LoggingFormat) -> Result<()> {
    const LOG_CONFIGURATION_ENVVAR: &str = "RUST_LOG";

    let filter = EnvFilter::new(
        env::var(LOG_CONFIGURATION_ENVVAR)
            .as_deref()
            .unwrap_or("info"),
    );

    // stdout is reserved for the call data.
    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(filter);

    match format {
        LoggingFormat::Json => subscriber.json().try_init(),
        LoggingFormat::Text => subscriber.try_init(),
    }
    .map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
    let config = CliConfig::parse();
    init_logging(config.logging_format)?;

    let path = &config.aligned_verification_data;
    let record = load_record(path, config.sender_address)
        .with_context(|| format!("Failed to load verification data from {path:?}"))?;
    info!(
        sender = %config.sender_address,
        index = %record.verification_data_batch_index,
        "Encoding verifyBatchInclusion call"
    );

    println!("{}", encode(&record));
    Ok(())
}
