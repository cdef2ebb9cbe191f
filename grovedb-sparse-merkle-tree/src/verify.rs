//! Proof verification for the sparse Merkle tree.
//!
//! The starting digest is `H(data)` for an existence proof and `H(dummy)` for
//! an absence proof; everything else is shared. A proof only verifies against
//! the tree's current root: proofs taken before a later insertion go stale.

use tracing::debug;

use crate::{
    MerkleHasher, ProofKind, SparseMerkleProof, SparseMerkleTree,
    hash::{hash_pair, mark},
    tree::with_root_marker,
};

impl<H: MerkleHasher> SparseMerkleTree<H> {
    /// Check `proof` as `kind` against the current root.
    pub fn verify(&self, proof: &SparseMerkleProof, kind: ProofKind) -> bool {
        if proof.root != self.root() {
            debug!(
                ?kind,
                proof_root = %hex::encode(&proof.root),
                tree_root = %self.root_hex(),
                "proof rejected: root is not the current root"
            );
            return false;
        }

        let Some(computed_root) = self.compute_root(proof, kind) else {
            return false;
        };

        if computed_root != proof.root {
            debug!(
                ?kind,
                expected = %hex::encode(&proof.root),
                computed = %hex::encode(&computed_root),
                "proof rejected: root hash mismatch"
            );
            return false;
        }
        true
    }

    /// Check that `proof.data` is stored in its slot.
    pub fn verify_existence(&self, proof: &SparseMerkleProof) -> bool {
        self.verify(proof, ProofKind::Existence)
    }

    /// Check that `proof.data`'s slot still holds the dummy value.
    ///
    /// Only the slot is bound to `proof.data`; the leaf digest checked is
    /// `H(dummy)`.
    pub fn verify_absence(&self, proof: &SparseMerkleProof) -> bool {
        self.verify(proof, ProofKind::Absence)
    }

    /// Recompute the root `proof` commits to as `kind`, without comparing it
    /// to anything.
    ///
    /// Returns `None` when the proof's path length does not match this tree's
    /// height.
    pub fn compute_root(&self, proof: &SparseMerkleProof, kind: ProofKind) -> Option<Vec<u8>> {
        let path = self.path_for(&proof.data);
        if proof.path.len() != path.len() {
            debug!(
                expected = path.len(),
                got = proof.path.len(),
                "proof rejected: wrong path length"
            );
            return None;
        }

        let mut digest = match kind {
            ProofKind::Existence => self.hasher().hash(&proof.data),
            ProofKind::Absence => self.hasher().hash(self.dummy()),
        };
        for (&index, sibling) in path.iter().zip(&proof.path) {
            digest = mark(digest, index, self.is_salted());
            digest = if index & 1 == 1 {
                hash_pair(self.hasher(), &digest, sibling)
            } else {
                hash_pair(self.hasher(), sibling, &digest)
            };
        }
        Some(with_root_marker(digest))
    }
}
