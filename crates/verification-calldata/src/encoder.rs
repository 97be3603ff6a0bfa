use std::fmt;

use alloy_primitives::Address;
use tracing::debug;

use crate::{
    abi::{encode_tuple, verify_batch_inclusion_selector, SELECTOR_LENGTH},
    error::Result,
    record::{RawVerificationRecord, VerificationRecord},
};

/// Complete call data for `verifyBatchInclusion`: selector followed by the encoded arguments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EncodedCallData(Vec<u8>);

impl EncodedCallData {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn selector(&self) -> &[u8] {
        &self.0[..SELECTOR_LENGTH]
    }

    /// ABI-encoded arguments, without the selector.
    pub fn arguments(&self) -> &[u8] {
        &self.0[SELECTOR_LENGTH..]
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Lowercase hex with the `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }
}

impl fmt::Display for EncodedCallData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for EncodedCallData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<EncodedCallData> for Vec<u8> {
    fn from(call_data: EncodedCallData) -> Self {
        call_data.0
    }
}

/// Build `verifyBatchInclusion` call data for `record`.
pub fn encode(record: &VerificationRecord) -> EncodedCallData {
    let arguments = encode_tuple(record);

    let mut call_data = Vec::with_capacity(SELECTOR_LENGTH + arguments.len());
    call_data.extend_from_slice(&verify_batch_inclusion_selector());
    call_data.extend_from_slice(&arguments);

    debug!(
        batch_merkle_root = %record.batch_merkle_root,
        index = %record.verification_data_batch_index,
        length = call_data.len(),
        "Encoded verifyBatchInclusion call data"
    );

    EncodedCallData(call_data)
}

/// Validate `raw` and encode it. Nothing is produced if any field fails to decode.
pub fn encode_raw(raw: RawVerificationRecord, sender_address: Address) -> Result<EncodedCallData> {
    let record = raw.into_record(sender_address)?;
    Ok(encode(&record))
}
