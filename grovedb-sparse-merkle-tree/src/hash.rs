//! Pluggable hash capability and the side-marker helpers.
//!
//! The tree never assumes a digest length, so a hasher may return outputs of
//! any size (the identity function used in tests returns its input).

use sha2::{Digest, Sha256};

/// A hash function over byte strings.
pub trait MerkleHasher {
    /// Hash `data` into a digest.
    fn hash(&self, data: &[u8]) -> Vec<u8>;
}

impl<F> MerkleHasher for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        self(data)
    }
}

/// Blake3, 32-byte digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl MerkleHasher for Blake3Hasher {
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        blake3::hash(data).as_bytes().to_vec()
    }
}

/// SHA-256, 32-byte digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        Sha256::digest(data).to_vec()
    }
}

/// Side byte for the node at flattened `index`: `0` for odd (left child),
/// `1` for even (right child, and the root).
pub(crate) fn side_marker(index: u64) -> u8 {
    if index & 1 == 1 { 0 } else { 1 }
}

/// Append the side byte for `index` when the tree is salted.
pub(crate) fn mark(mut digest: Vec<u8>, index: u64, salted: bool) -> Vec<u8> {
    if salted {
        digest.push(side_marker(index));
    }
    digest
}

/// Hash `left || right`.
pub(crate) fn hash_pair<H: MerkleHasher>(hasher: &H, left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(left.len() + right.len());
    buf.extend_from_slice(left);
    buf.extend_from_slice(right);
    hasher.hash(&buf)
}
