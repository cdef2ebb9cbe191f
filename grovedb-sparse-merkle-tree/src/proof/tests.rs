#[cfg(test)]
mod proof_tests {
    use assert_matches::assert_matches;

    use crate::{
        Blake3Hasher, SparseMerkleError, SparseMerkleTree,
        proof::*,
        test_utils::identity_tree_h3,
    };

    /// Height-8 salted Blake3 tree holding values [0]..[19].
    fn make_tree_h8() -> SparseMerkleTree {
        let mut tree = SparseMerkleTree::new(8, b"dummy".to_vec(), true, Blake3Hasher)
            .expect("height 8 should be valid");
        for i in 0u8..20 {
            tree.insert(&[i]);
        }
        tree
    }

    #[test]
    fn test_proof_fields_identity_h3() {
        let mut tree = identity_tree_h3();
        tree.insert(&[3]);

        let proof = tree.prove(&[3]);
        assert_eq!(proof.index, 6);
        assert_eq!(proof.data, vec![3u8]);
        assert_eq!(proof.root, tree.root());
        // Siblings of 6 and 2 are 5 and 1.
        assert_eq!(
            proof.path,
            vec![vec![123u8, 0], vec![123u8, 0, 123, 1, 0]]
        );

        let absence = tree.prove(&[2]);
        assert_eq!(absence.index, 5);
        assert_eq!(absence.path, vec![vec![3u8, 1], vec![123u8, 0, 123, 1, 0]]);
    }

    #[test]
    fn test_existence_and_absence_share_one_shape() {
        let tree = make_tree_h8();
        assert_eq!(tree.prove_existence(b"x"), tree.prove_absence(b"x"));
        assert_eq!(tree.prove_existence(b"x"), tree.prove(b"x"));
    }

    #[test]
    fn test_path_length_matches_height() {
        let tree = make_tree_h8();
        let proof = tree.prove(&[7]);
        assert_eq!(proof.path.len(), 7);
        assert_eq!(proof.index, tree.leaf_index(&[7]));
    }

    #[test]
    fn test_proof_outlives_later_inserts() {
        let mut tree = make_tree_h8();
        let proof = tree.prove(&[4]);
        tree.insert(b"later");
        // The snapshot itself is unchanged, but it no longer matches the tree.
        assert_ne!(proof.root, tree.root());
        assert!(!tree.verify(&proof, ProofKind::Existence));
    }

    #[test]
    fn test_encode_decode_preserves_verification() {
        let tree = make_tree_h8();
        let proof = tree.prove_existence(&[11]);
        let bytes = proof.encode_to_vec().expect("encode should succeed");
        let decoded = SparseMerkleProof::decode_from_slice(&bytes).expect("decode should succeed");
        assert_eq!(decoded, proof);
        assert!(tree.verify_existence(&decoded));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert_matches!(
            SparseMerkleProof::decode_from_slice(&[0xff, 0xff, 0xff]),
            Err(SparseMerkleError::InvalidProof(_))
        );
    }

    #[test]
    fn test_decode_truncated_fails() {
        let tree = make_tree_h8();
        let bytes = tree
            .prove(&[1])
            .encode_to_vec()
            .expect("encode should succeed");
        assert_matches!(
            SparseMerkleProof::decode_from_slice(&bytes[..bytes.len() - 1]),
            Err(SparseMerkleError::InvalidProof(_))
        );
    }

    #[test]
    fn test_decode_rejects_empty_path() {
        let proof = SparseMerkleProof {
            path: Vec::new(),
            index: 0,
            data: vec![1],
            root: vec![1],
        };
        let bytes = proof.encode_to_vec().expect("encode should succeed");
        assert_matches!(
            SparseMerkleProof::decode_from_slice(&bytes),
            Err(SparseMerkleError::InvalidProof(_))
        );
    }

    #[test]
    fn test_proof_from_other_tree_is_rejected() {
        let tree = make_tree_h8();
        let mut other = SparseMerkleTree::new(8, b"other".to_vec(), true, Blake3Hasher)
            .expect("height 8 should be valid");
        other.insert(&[3]);
        assert!(!tree.verify_existence(&other.prove(&[3])));
    }
}
