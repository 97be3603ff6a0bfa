use alloy_primitives::{Address, Bytes, FixedBytes, U256};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{Error, Result},
    hex_field::{decode_dynamic, decode_fixed, parse_batch_index},
};

/// Size of a single node of the batch Merkle path.
pub const MERKLE_NODE_SIZE: usize = 32;

/// Batch inclusion data as written to disk after a proof has been included in a batch.
///
/// All fields are optional at the serialization level, so that an absent (or `null`) key can be
/// reported as [`Error::MissingField`] instead of a generic JSON error. Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawVerificationRecord {
    pub proof_commitment: Option<String>,
    pub pub_input_commitment: Option<String>,
    #[serde(rename = "program_id_commitment")]
    pub proving_system_aux_data_commitment: Option<String>,
    pub proof_generator_addr: Option<String>,
    pub batch_merkle_root: Option<String>,
    pub merkle_proof: Option<String>,
    pub verification_data_batch_index: Option<Value>,
}

fn required<T>(value: Option<T>, key: &'static str) -> Result<T> {
    value.ok_or(Error::MissingField(key))
}

impl RawVerificationRecord {
    /// Validate and decode all fields. The first failing field aborts the conversion.
    pub fn into_record(self, sender_address: Address) -> Result<VerificationRecord> {
        let proof_commitment = decode_fixed(
            "proof_commitment",
            &required(self.proof_commitment, "proof_commitment")?,
        )?;
        let pub_input_commitment = decode_fixed(
            "pub_input_commitment",
            &required(self.pub_input_commitment, "pub_input_commitment")?,
        )?;
        let proving_system_aux_data_commitment = decode_fixed(
            "program_id_commitment",
            &required(
                self.proving_system_aux_data_commitment,
                "program_id_commitment",
            )?,
        )?;
        let proof_generator_addr = decode_fixed(
            "proof_generator_addr",
            &required(self.proof_generator_addr, "proof_generator_addr")?,
        )?;
        let batch_merkle_root = decode_fixed(
            "batch_merkle_root",
            &required(self.batch_merkle_root, "batch_merkle_root")?,
        )?;
        let merkle_proof = decode_dynamic(
            "merkle_proof",
            &required(self.merkle_proof, "merkle_proof")?,
        )?;
        let verification_data_batch_index = parse_batch_index(
            "verification_data_batch_index",
            &required(
                self.verification_data_batch_index,
                "verification_data_batch_index",
            )?,
        )?;

        Ok(VerificationRecord {
            proof_commitment,
            pub_input_commitment,
            proving_system_aux_data_commitment,
            proof_generator_addr,
            batch_merkle_root,
            merkle_proof,
            verification_data_batch_index,
            sender_address,
        })
    }
}

/// Fully decoded arguments of a `verifyBatchInclusion` call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VerificationRecord {
    pub proof_commitment: FixedBytes<32>,
    pub pub_input_commitment: FixedBytes<32>,
    /// Commitment to the program (zkVMs) or the verification key (other proving systems).
    pub proving_system_aux_data_commitment: FixedBytes<32>,
    pub proof_generator_addr: FixedBytes<20>,
    pub batch_merkle_root: FixedBytes<32>,
    pub merkle_proof: Bytes,
    pub verification_data_batch_index: U256,
    /// Address that submitted the batch. Not part of the on-disk record.
    pub sender_address: Address,
}

impl VerificationRecord {
    /// View `merkle_proof` as a sequence of Merkle path nodes. A trailing chunk shorter than
    /// [`MERKLE_NODE_SIZE`] is yielded as is.
    pub fn merkle_path(&self) -> impl Iterator<Item = &[u8]> {
        self.merkle_proof.chunks(MERKLE_NODE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, U256};
    use serde_json::json;

    use super::*;
    use crate::error::DecodingErrorReason;

    const SENDER: Address = address!("6666666666666666666666666666666666666666");

    fn raw_record() -> RawVerificationRecord {
        RawVerificationRecord {
            proof_commitment: Some("00".repeat(32)),
            pub_input_commitment: Some("11".repeat(32)),
            proving_system_aux_data_commitment: Some("22".repeat(32)),
            proof_generator_addr: Some("33".repeat(20)),
            batch_merkle_root: Some("44".repeat(32)),
            merkle_proof: Some("55".repeat(3)),
            verification_data_batch_index: Some(json!(7)),
        }
    }

    #[test]
    fn decodes_all_fields() {
        let record = raw_record().into_record(SENDER).unwrap();

        assert_eq!(record.proof_commitment, FixedBytes::repeat_byte(0x00));
        assert_eq!(record.pub_input_commitment, FixedBytes::repeat_byte(0x11));
        assert_eq!(
            record.proving_system_aux_data_commitment,
            FixedBytes::repeat_byte(0x22)
        );
        assert_eq!(record.proof_generator_addr, FixedBytes::repeat_byte(0x33));
        assert_eq!(record.batch_merkle_root, FixedBytes::repeat_byte(0x44));
        assert_eq!(&record.merkle_proof[..], &[0x55; 3]);
        assert_eq!(record.verification_data_batch_index, U256::from(7));
        assert_eq!(record.sender_address, SENDER);
    }

    #[test]
    fn missing_field_is_reported_by_json_key() {
        let raw = RawVerificationRecord {
            proving_system_aux_data_commitment: None,
            ..raw_record()
        };
        assert!(matches!(
            raw.into_record(SENDER),
            Err(Error::MissingField("program_id_commitment"))
        ));

        let raw = RawVerificationRecord {
            verification_data_batch_index: None,
            ..raw_record()
        };
        assert!(matches!(
            raw.into_record(SENDER),
            Err(Error::MissingField("verification_data_batch_index"))
        ));
    }

    #[test]
    fn short_proof_commitment_is_rejected() {
        let raw = RawVerificationRecord {
            proof_commitment: Some("00".repeat(31)),
            ..raw_record()
        };
        assert!(matches!(
            raw.into_record(SENDER),
            Err(Error::Decoding {
                field: "proof_commitment",
                reason: DecodingErrorReason::IncorrectLength {
                    expected: 32,
                    actual: 31
                },
            })
        ));
    }

    #[test]
    fn proof_generator_address_must_be_20_bytes() {
        let raw = RawVerificationRecord {
            proof_generator_addr: Some("33".repeat(32)),
            ..raw_record()
        };
        assert!(matches!(
            raw.into_record(SENDER),
            Err(Error::Decoding {
                field: "proof_generator_addr",
                reason: DecodingErrorReason::IncorrectLength {
                    expected: 20,
                    actual: 32
                },
            })
        ));
    }

    #[test]
    fn deserializes_sdk_output_and_ignores_unknown_keys() {
        let raw: RawVerificationRecord = serde_json::from_value(json!({
            "proof_commitment": "00".repeat(32),
            "pub_input_commitment": "11".repeat(32),
            "program_id_commitment": "22".repeat(32),
            "proof_generator_addr": "33".repeat(20),
            "batch_merkle_root": "44".repeat(32),
            "pub_input": "deadbeef",
            "verification_data_batch_index": 7,
            "merkle_proof": "55".repeat(3),
        }))
        .unwrap();
        assert_eq!(raw, raw_record());
    }

    #[test]
    fn null_counts_as_missing() {
        let raw: RawVerificationRecord = serde_json::from_value(json!({
            "proof_commitment": null,
        }))
        .unwrap();
        assert!(matches!(
            raw.into_record(SENDER),
            Err(Error::MissingField("proof_commitment"))
        ));
    }

    #[test]
    fn merkle_path_splits_into_nodes() {
        let raw = RawVerificationRecord {
            merkle_proof: Some(format!("{}{}{}", "aa".repeat(32), "bb".repeat(32), "cc")),
            ..raw_record()
        };
        let record = raw.into_record(SENDER).unwrap();
        let nodes: Vec<&[u8]> = record.merkle_path().collect();

        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], &[0xaa; 32]);
        assert_eq!(nodes[1], &[0xbb; 32]);
        assert_eq!(nodes[2], &[0xcc]);
    }
}
