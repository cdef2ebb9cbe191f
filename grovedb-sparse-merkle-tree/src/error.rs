use thiserror::Error;

/// Errors from sparse Merkle tree operations.
///
/// Verification never errors: a proof that does not check out is reported as
/// `false`.
#[derive(Debug, Error)]
pub enum SparseMerkleError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
