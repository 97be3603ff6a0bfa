use std::{fs, io, path::Path};

use alloy_primitives::Address;
use tracing::debug;

use crate::{
    error::{Error, Result},
    record::{RawVerificationRecord, VerificationRecord},
};

/// Parse batch inclusion data from a JSON string.
pub fn parse_raw_record(json: &str) -> Result<RawVerificationRecord> {
    Ok(serde_json::from_str(json)?)
}

/// Read batch inclusion data from the JSON file at `path`.
pub fn load_raw_record(path: impl AsRef<Path>) -> Result<RawVerificationRecord> {
    let path = path.as_ref();
    debug!("Reading verification data from {path:?}");

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_raw_record(&content)
}

/// Read and validate batch inclusion data, attaching `sender_address`.
pub fn load_record(path: impl AsRef<Path>, sender_address: Address) -> Result<VerificationRecord> {
    load_raw_record(path)?.into_record(sender_address)
}
