use std::path::PathBuf;

use alloy_primitives::Address;
use clap::{Parser, ValueEnum};

#[derive(Clone, Eq, PartialEq, Debug, Parser)]
#[clap(name = "encode-verification-data", version)]
pub struct CliConfig {
    /// Path to the JSON file with the batch inclusion data.
    #[clap(long, value_parser = parsing::parse_path)]
    pub aligned_verification_data: PathBuf,

    /// Address that sent the batch. 20 bytes of hex, `0x` prefix optional.
    #[clap(long, value_parser = parsing::parse_address)]
    pub sender_address: Address,

    /// Logging configuration. Logs are written to stderr.
    #[clap(short = 'l', long, value_enum, default_value = "text")]
    pub logging_format: LoggingFormat,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
pub enum LoggingFormat {
    #[default]
    Text,
    Json,
}

mod parsing {
    use std::{path::PathBuf, str::FromStr};

    use alloy_primitives::Address;
    use anyhow::{anyhow, Result};

    pub fn parse_path(path: &str) -> Result<PathBuf> {
        let expanded_path =
            shellexpand::full(path).map_err(|e| anyhow!("Failed to expand path: {e:?}"))?;
        PathBuf::from_str(expanded_path.as_ref())
            .map_err(|e| anyhow!("Failed to interpret path: {e:?}"))
    }

    pub fn parse_address(address: &str) -> Result<Address> {
        verification_calldata::hex_field::parse_address("sender_address", address)
            .map_err(|e| anyhow!(e))
    }
}
