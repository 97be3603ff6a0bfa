//! Call data for batch inclusion verification.
//!
//! Turns the batch inclusion data saved after a proof submission into call data for
//! `verifyBatchInclusion(bytes32,bytes32,bytes32,bytes20,bytes32,bytes,uint256,address)`:
//! - [input]: reading the JSON record from disk;
//! - [record]: the raw JSON shape and its validated counterpart;
//! - [encoder]: selector + ABI encoding, rendered as `0x`-prefixed hex;
//! - [decoder]: the inverse, for inspecting existing call data.

pub mod abi;
pub mod decoder;
pub mod encoder;
mod error;
pub mod hex_field;
pub mod input;
pub mod record;

pub use abi::{
    function_selector, hash256, verify_batch_inclusion_selector, AlignedLayerServiceManager,
    VERIFY_BATCH_INCLUSION_SIGNATURE,
};
pub use decoder::{decode_call_data, decode_call_data_hex};
pub use encoder::{encode, encode_raw, EncodedCallData};
pub use error::{DecodingErrorReason, Error, Result};
pub use input::{load_raw_record, load_record, parse_raw_record};
pub use record::{RawVerificationRecord, VerificationRecord};
