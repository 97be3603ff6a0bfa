use crate::{
    abi::{decode_tuple, verify_batch_inclusion_selector, SELECTOR_LENGTH},
    error::{DecodingErrorReason, Error, Result},
    record::VerificationRecord,
};

/// Recover the record from `verifyBatchInclusion` call data.
///
/// Fails with [`Error::SelectorMismatch`] when the data is addressed to a different function.
pub fn decode_call_data(call_data: &[u8]) -> Result<VerificationRecord> {
    let expected = verify_batch_inclusion_selector();
    if call_data.len() < SELECTOR_LENGTH || call_data[..SELECTOR_LENGTH] != expected {
        return Err(Error::SelectorMismatch {
            expected,
            actual: call_data[..call_data.len().min(SELECTOR_LENGTH)].to_vec(),
        });
    }
    decode_tuple(&call_data[SELECTOR_LENGTH..])
}

/// Hex variant of [`decode_call_data`]. The `0x` prefix is optional.
pub fn decode_call_data_hex(call_data: &str) -> Result<VerificationRecord> {
    let stripped = call_data.strip_prefix("0x").unwrap_or(call_data);
    let bytes = hex::decode(stripped).map_err(|e| Error::Decoding {
        field: "call_data",
        reason: DecodingErrorReason::InvalidHex(e),
    })?;
    decode_call_data(&bytes)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, Bytes, FixedBytes, U256};

    use super::*;
    use crate::encoder::encode;

    fn record() -> VerificationRecord {
        VerificationRecord {
            proof_commitment: FixedBytes::repeat_byte(0x10),
            pub_input_commitment: FixedBytes::repeat_byte(0x20),
            proving_system_aux_data_commitment: FixedBytes::repeat_byte(0x30),
            proof_generator_addr: FixedBytes::repeat_byte(0x40),
            batch_merkle_root: FixedBytes::repeat_byte(0x50),
            merkle_proof: Bytes::from(vec![0x60; 96]),
            verification_data_batch_index: U256::MAX,
            sender_address: address!("7070707070707070707070707070707070707070"),
        }
    }

    #[test]
    fn round_trip_through_bytes_and_hex() {
        let record = record();
        let call_data = encode(&record);

        assert_eq!(decode_call_data(call_data.as_bytes()).unwrap(), record);
        assert_eq!(decode_call_data_hex(&call_data.to_hex()).unwrap(), record);
    }

    #[test]
    fn foreign_selector_is_rejected() {
        let mut bytes = encode(&record()).into_bytes();
        bytes[0] ^= 0xff;

        assert!(matches!(
            decode_call_data(&bytes),
            Err(Error::SelectorMismatch { .. })
        ));
    }

    #[test]
    fn too_short_input_is_rejected() {
        assert!(matches!(
            decode_call_data(&[0x06, 0x04]),
            Err(Error::SelectorMismatch { actual, .. }) if actual == vec![0x06, 0x04]
        ));
    }

    #[test]
    fn selector_without_arguments_fails_abi_decoding() {
        assert!(matches!(
            decode_call_data(&verify_batch_inclusion_selector()),
            Err(Error::AbiDecoding(_))
        ));
    }
}
