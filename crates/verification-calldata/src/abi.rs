//! Thin layer over the ABI and hashing libraries. The rest of the crate only talks to these
//! functions, never to `alloy-sol-types` or `sha3` directly.

use alloy_primitives::{Address, Bytes, FixedBytes, U256};
use alloy_sol_types::{sol, SolValue};
use sha3::{Digest, Keccak256};

use crate::{error::Result, record::VerificationRecord};

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface AlignedLayerServiceManager {
        function verifyBatchInclusion(
            bytes32 proofCommitment,
            bytes32 pubInputCommitment,
            bytes32 provingSystemAuxDataCommitment,
            bytes20 proofGeneratorAddr,
            bytes32 batchMerkleRoot,
            bytes memory merkleProof,
            uint256 verificationDataBatchIndex,
            address senderAddress
        ) external view returns (bool);
    }
}

/// Canonical signature of the only supported contract function.
pub const VERIFY_BATCH_INCLUSION_SIGNATURE: &str =
    "verifyBatchInclusion(bytes32,bytes32,bytes32,bytes20,bytes32,bytes,uint256,address)";

/// Length of a function selector in bytes.
pub const SELECTOR_LENGTH: usize = 4;

/// Solidity-side shape of the `verifyBatchInclusion` arguments.
type VerifyBatchInclusionArgs = (
    FixedBytes<32>,
    FixedBytes<32>,
    FixedBytes<32>,
    FixedBytes<20>,
    FixedBytes<32>,
    Bytes,
    U256,
    Address,
);

/// Keccak-256, as used by the EVM for selectors and storage keys.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// First four bytes of the Keccak-256 hash of `signature`.
pub fn function_selector(signature: &str) -> [u8; SELECTOR_LENGTH] {
    let hash = hash256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Selector of `verifyBatchInclusion(...)`.
pub fn verify_batch_inclusion_selector() -> [u8; SELECTOR_LENGTH] {
    function_selector(VERIFY_BATCH_INCLUSION_SIGNATURE)
}

/// ABI-encode the record as the argument list of `verifyBatchInclusion` (without selector).
pub fn encode_tuple(record: &VerificationRecord) -> Vec<u8> {
    let args: VerifyBatchInclusionArgs = (
        record.proof_commitment,
        record.pub_input_commitment,
        record.proving_system_aux_data_commitment,
        record.proof_generator_addr,
        record.batch_merkle_root,
        record.merkle_proof.clone(),
        record.verification_data_batch_index,
        record.sender_address,
    );
    args.abi_encode_params()
}

/// Inverse of [`encode_tuple`]. Input must be exactly the argument bytes (no selector).
pub fn decode_tuple(data: &[u8]) -> Result<VerificationRecord> {
    let (
        proof_commitment,
        pub_input_commitment,
        proving_system_aux_data_commitment,
        proof_generator_addr,
        batch_merkle_root,
        merkle_proof,
        verification_data_batch_index,
        sender_address,
    ) = <VerifyBatchInclusionArgs as SolValue>::abi_decode_params(data, true)?;

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
