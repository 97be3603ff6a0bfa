use core::result;
use std::path::PathBuf;

use hex::FromHexError;
use thiserror::Error;

/// Why a single field of the verification record could not be decoded.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodingErrorReason {
    #[error("invalid hex string")]
    InvalidHex(#[from] FromHexError),

    #[error("incorrect byte length: expected {expected}, got {actual}")]
    IncorrectLength { expected: usize, actual: usize },

    #[error("negative integer cannot be encoded as uint256")]
    NegativeInteger,

    #[error("value is not an integer")]
    NotAnInteger,

    #[error("integer does not fit in 256 bits")]
    Overflow,
}

/// Errors produced while loading, decoding or encoding verification records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("verification data file {0:?} does not exist")]
    FileNotFound(PathBuf),

    #[error("failed to read verification data file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("verification data is not valid JSON")]
    MalformedJson(#[from] serde_json::Error),

    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("failed to decode field `{field}`")]
    Decoding {
        field: &'static str,
        #[source]
        reason: DecodingErrorReason,
    },

    #[error("call data selector 0x{} does not match expected 0x{}", hex::encode(.actual), hex::encode(.expected))]
    SelectorMismatch { expected: [u8; 4], actual: Vec<u8> },

    #[error("failed to ABI-decode call arguments")]
    AbiDecoding(#[from] alloy_sol_types::Error),
}

impl Error {
    pub(crate) fn decoding(field: &'static str, reason: impl Into<DecodingErrorReason>) -> Self {
        Error::Decoding {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
