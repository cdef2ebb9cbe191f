use tracing::{debug, trace};

use crate::{
    Blake3Hasher, LeafAddressing, MerkleHasher, SparseMerkleError, SparseMerkleTreeConfig,
    hash::{hash_pair, mark},
    index::leaf_path,
};

/// Smallest supported height: one leaf level under the root.
pub const MIN_HEIGHT: u8 = 2;

/// Largest supported height.
///
/// All `2^height - 1` node digests are held in memory as separate buffers:
/// at this height that is about one million digests, roughly 100 MB with
/// 32-byte hashes.
pub const MAX_HEIGHT: u8 = 20;

/// Byte appended to every root digest, whether or not the tree is salted.
///
/// Kept for compatibility with existing roots: a root computed over the same
/// leaves without this byte will not match.
pub const ROOT_MARKER: u8 = 1;

/// A fixed-depth sparse Merkle tree.
///
/// Positions are indexed level-order: root=0, left child=2i+1, right
/// child=2i+2. Leaves occupy the last `2^(height-1)` positions and start out
/// holding `H(dummy)`.
///
/// The tree has a single writer: `insert` takes `&mut self`, proof
/// generation and verification take `&self`.
#[derive(Debug, Clone)]
pub struct SparseMerkleTree<H = Blake3Hasher> {
    hasher: H,
    height: u8,
    salted: bool,
    addressing: LeafAddressing,
    dummy: Vec<u8>,
    /// `dummy_hashes[k]` is the digest of an untouched subtree whose root sits
    /// `k` levels above the leaves.
    dummy_hashes: Vec<Vec<u8>>,
    nodes: Vec<Vec<u8>>,
}

impl<H: MerkleHasher> SparseMerkleTree<H> {
    /// Create a new tree where every leaf holds `dummy`.
    ///
    /// Height must be between [`MIN_HEIGHT`] and [`MAX_HEIGHT`] inclusive.
    /// Leaves are addressed by value hash.
    pub fn new(
        height: u8,
        dummy: impl Into<Vec<u8>>,
        salted: bool,
        hasher: H,
    ) -> Result<Self, SparseMerkleError> {
        let config = SparseMerkleTreeConfig::new(height)
            .with_dummy(dummy)
            .with_salted(salted);
        Self::from_config(config, hasher)
    }

    /// Create a new tree from a full configuration.
    pub fn from_config(
        config: SparseMerkleTreeConfig,
        hasher: H,
    ) -> Result<Self, SparseMerkleError> {
        config.validate()?;
        let SparseMerkleTreeConfig {
            height,
            dummy,
            salted,
            addressing,
        } = config;

        let dummy_hashes = dummy_hash_chain(&hasher, &dummy, height, salted);

        let node_count = (1u64 << height) - 1;
        let mut nodes = Vec::with_capacity(node_count as usize);
        nodes.push(with_root_marker(dummy_hashes[height as usize - 1].clone()));
        for index in 1..node_count {
            let level = height as usize - 1 - depth_of(index) as usize;
            nodes.push(mark(dummy_hashes[level].clone(), index, salted));
        }

        let tree = Self {
            hasher,
            height,
            salted,
            addressing,
            dummy,
            dummy_hashes,
            nodes,
        };
        debug!(
            height,
            salted,
            leaf_count = tree.leaf_count(),
            root = %tree.root_hex(),
            "created sparse merkle tree"
        );
        Ok(tree)
    }

    /// Number of levels including the leaves and the root.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether non-root digests carry a side byte.
    pub fn is_salted(&self) -> bool {
        self.salted
    }

    /// How values are mapped to leaf slots.
    pub fn addressing(&self) -> LeafAddressing {
        self.addressing
    }

    /// Content of every leaf that was never written.
    pub fn dummy(&self) -> &[u8] {
        &self.dummy
    }

    /// Digests of untouched subtrees, indexed by level above the leaves.
    pub fn dummy_hashes(&self) -> &[Vec<u8>] {
        &self.dummy_hashes
    }

    /// The hash function this tree was built with.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Number of leaf slots.
    pub fn leaf_count(&self) -> u64 {
        1u64 << (self.height - 1)
    }

    /// The current root digest, including its trailing [`ROOT_MARKER`].
    pub fn root(&self) -> &[u8] {
        &self.nodes[0]
    }

    /// The current root digest as lowercase hex.
    pub fn root_hex(&self) -> String {
        hex::encode(self.root())
    }

    /// The stored digest at flattened `index`, or `None` past the last node.
    pub fn node(&self, index: u64) -> Option<&[u8]> {
        self.nodes.get(index as usize).map(Vec::as_slice)
    }

    /// Flattened index of the leaf slot `value` maps to.
    pub fn leaf_index(&self, value: &[u8]) -> u64 {
        self.path_for(value)[0]
    }

    /// Write `H(value)` to the leaf slot `value` maps to and rehash every
    /// ancestor up to the root.
    ///
    /// Writing a slot again replaces its previous content. Returns the
    /// flattened index of the written leaf.
    pub fn insert(&mut self, value: &[u8]) -> u64 {
        let leaf_hash = self.hasher.hash(value);
        let path = match self.addressing {
            LeafAddressing::ValueHash => leaf_path(&leaf_hash, self.height),
            LeafAddressing::RawValue => leaf_path(value, self.height),
        };

        let leaf = path[0];
        self.nodes[leaf as usize] = mark(leaf_hash, leaf, self.salted);

        for level in path.windows(2) {
            let (child, parent) = (level[0], level[1]);
            let (left, right) = ordered_pair(child);
            let digest = hash_pair(
                &self.hasher,
                &self.nodes[left as usize],
                &self.nodes[right as usize],
            );
            self.nodes[parent as usize] = mark(digest, parent, self.salted);
        }

        self.nodes[0] = with_root_marker(hash_pair(&self.hasher, &self.nodes[1], &self.nodes[2]));

        trace!(leaf, root = %self.root_hex(), "inserted leaf");
        leaf
    }

    /// Insert every value in order. Returns the written leaf indices.
    pub fn extend<I, V>(&mut self, values: I) -> Vec<u64>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<[u8]>,
    {
        values
            .into_iter()
            .map(|value| self.insert(value.as_ref()))
            .collect()
    }

    /// Leaf-to-root index path for `value` under the configured addressing.
    pub(crate) fn path_for(&self, value: &[u8]) -> Vec<u64> {
        match self.addressing {
            LeafAddressing::ValueHash => leaf_path(&self.hasher.hash(value), self.height),
            LeafAddressing::RawValue => leaf_path(value, self.height),
        }
    }

    /// Stored digest at a path index. Path indices are always in range.
    pub(crate) fn node_at(&self, index: u64) -> &[u8] {
        &self.nodes[index as usize]
    }
}

/// Build the `height`-entry chain `H(dummy)`, `H(d0 || d0)`, ... where each
/// side is marked as a left/right child when salted.
fn dummy_hash_chain<H: MerkleHasher>(
    hasher: &H,
    dummy: &[u8],
    height: u8,
    salted: bool,
) -> Vec<Vec<u8>> {
    let mut chain = Vec::with_capacity(height as usize);
    chain.push(hasher.hash(dummy));
    while chain.len() < height as usize {
        let below = &chain[chain.len() - 1];
        let left = mark(below.clone(), 1, salted);
        let right = mark(below.clone(), 2, salted);
        chain.push(hash_pair(hasher, &left, &right));
    }
    chain
}

/// Depth of a level-order index, the root being at depth 0.
fn depth_of(index: u64) -> u32 {
    u64::BITS - 1 - (index + 1).leading_zeros()
}

/// `(left, right)` indices of the pair `index` belongs to.
fn ordered_pair(index: u64) -> (u64, u64) {
    if index & 1 == 1 {
        (index, index + 1)
    } else {
        (index - 1, index)
    }
}

pub(crate) fn with_root_marker(mut digest: Vec<u8>) -> Vec<u8> {
    digest.push(ROOT_MARKER);
    digest
}
