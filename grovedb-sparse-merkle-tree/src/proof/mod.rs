//! Proof generation for the sparse Merkle tree.
//!
//! A single proof shape serves both questions one can ask about a slot: does
//! it hold this value, or does it still hold the dummy. Which question is
//! answered is chosen at verification time with [`ProofKind`].

use bincode::{Decode, Encode};

use crate::{MerkleHasher, SparseMerkleError, SparseMerkleTree, index::sibling_index};

mod tests;

/// What a proof is checked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProofKind {
    /// The value's slot holds `H(value)`.
    Existence,
    /// The value's slot still holds `H(dummy)`.
    Absence,
}

/// Sibling digests along one value's leaf-to-root path, captured against a
/// specific root.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMerkleProof {
    /// Sibling digest at every level from the leaf up to the root's children,
    /// `height - 1` entries.
    pub path: Vec<Vec<u8>>,
    /// Flattened index of the value's leaf slot.
    pub index: u64,
    /// The value this proof is about.
    pub data: Vec<u8>,
    /// Root digest at the time the proof was taken.
    pub root: Vec<u8>,
}

impl<H: MerkleHasher> SparseMerkleTree<H> {
    /// Capture the authentication path for `value`'s slot.
    ///
    /// The proof does not say anything by itself; it is checked with
    /// [`verify`](Self::verify) as either an existence or an absence proof.
    pub fn prove(&self, value: &[u8]) -> SparseMerkleProof {
        let path = self.path_for(value);
        SparseMerkleProof {
            path: path
                .iter()
                .map(|&index| self.node_at(sibling_index(index)).to_vec())
                .collect(),
            index: path[0],
            data: value.to_vec(),
            root: self.root().to_vec(),
        }
    }

    /// Proof that `value` is stored in its slot. Same as [`prove`](Self::prove).
    pub fn prove_existence(&self, value: &[u8]) -> SparseMerkleProof {
        self.prove(value)
    }

    /// Proof that `value`'s slot was never written. Same as
    /// [`prove`](Self::prove).
    pub fn prove_absence(&self, value: &[u8]) -> SparseMerkleProof {
        self.prove(value)
    }
}

impl SparseMerkleProof {
    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, SparseMerkleError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| SparseMerkleError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode.
    ///
    /// Rejects proofs with an empty path, which no tree can produce.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, SparseMerkleError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 100 * 1024 * 1024 }>(); // 100MB limit
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| SparseMerkleError::InvalidProof(format!("decode error: {}", e)))?;
        if proof.path.is_empty() {
            return Err(SparseMerkleError::InvalidProof(
                "proof path is empty".into(),
            ));
        }
        Ok(proof)
    }
}
