//! Fixed-depth sparse Merkle tree with existence and absence proofs.
//!
//! A complete binary tree of height h holds `2^(h-1)` leaf slots in a
//! flattened level-order array of `2^h - 1` node digests (root = 0, children
//! of `i` at `2i+1` and `2i+2`). Every slot starts out holding a fixed
//! "dummy" value, so the empty tree is fully determined by a per-level chain
//! of dummy hashes.
//!
//! A value selects its leaf slot through the low `h-1` bits of its address
//! (either the value's hash or the raw value, see [`LeafAddressing`]).
//! Inserting writes `H(value)` to that slot and rehashes the ancestor chain:
//!
//! `parent = H(left || right)`
//!
//! When the tree is salted, every non-root digest carries one trailing side
//! byte (`0` for a left child, `1` for a right child). The root digest always
//! carries a trailing `1`, salted or not.
//!
//! The hash function is supplied by the caller through [`MerkleHasher`].

#![warn(missing_docs)]

mod config;
mod error;
pub(crate) mod hash;
pub(crate) mod index;
pub(crate) mod proof;
pub(crate) mod tree;
mod verify;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{LeafAddressing, SparseMerkleTreeConfig};
pub use error::SparseMerkleError;
pub use hash::{Blake3Hasher, MerkleHasher, Sha256Hasher};
pub use proof::{ProofKind, SparseMerkleProof};
pub use tree::{MAX_HEIGHT, MIN_HEIGHT, ROOT_MARKER, SparseMerkleTree};
