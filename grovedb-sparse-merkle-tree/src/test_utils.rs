//! Test utilities: deterministic hashers and tree builders.

use crate::{MerkleHasher, SparseMerkleTree};

/// "Hash" that returns its input unchanged, so expected digests can be
/// written out byte by byte.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct IdentityHasher;

impl MerkleHasher for IdentityHasher {
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        data.to_vec()
    }
}

/// Height-3 salted tree with dummy `[123]` over the identity hasher.
pub(crate) fn identity_tree_h3() -> SparseMerkleTree<IdentityHasher> {
    SparseMerkleTree::new(3, vec![123u8], true, IdentityHasher).expect("height 3 should be valid")
}
