use crate::{
    SparseMerkleError,
    tree::{MAX_HEIGHT, MIN_HEIGHT},
};

/// Which bytes select a value's leaf slot.
///
/// The same rule is applied by insertion, proof generation and verification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LeafAddressing {
    /// The slot is taken from `H(value)`.
    #[default]
    ValueHash,
    /// The slot is taken from the value itself.
    RawValue,
}

/// Parameters of a [`SparseMerkleTree`](crate::SparseMerkleTree).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMerkleTreeConfig {
    /// Number of levels including the leaves and the root.
    pub height: u8,
    /// Content of every leaf that was never written.
    pub dummy: Vec<u8>,
    /// Append a side byte to every non-root digest.
    pub salted: bool,
    /// How values are mapped to leaf slots.
    pub addressing: LeafAddressing,
}

impl Default for SparseMerkleTreeConfig {
    fn default() -> Self {
        Self {
            height: 16,
            dummy: Vec::new(),
            salted: true,
            addressing: LeafAddressing::default(),
        }
    }
}

impl SparseMerkleTreeConfig {
    /// Config with the given height and defaults for everything else.
    pub fn new(height: u8) -> Self {
        Self {
            height,
            ..Default::default()
        }
    }

    /// Set the dummy leaf content.
    pub fn with_dummy(mut self, dummy: impl Into<Vec<u8>>) -> Self {
        self.dummy = dummy.into();
        self
    }

    /// Enable or disable side-byte salting.
    pub fn with_salted(mut self, salted: bool) -> Self {
        self.salted = salted;
        self
    }

    /// Set the leaf addressing rule.
    pub fn with_addressing(mut self, addressing: LeafAddressing) -> Self {
        self.addressing = addressing;
        self
    }

    /// Check that the height is in `[MIN_HEIGHT, MAX_HEIGHT]`.
    pub fn validate(&self) -> Result<(), SparseMerkleError> {
        if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&self.height) {
            return Err(SparseMerkleError::InvalidConfiguration(format!(
                "height must be between {} and {}, got {}",
                MIN_HEIGHT, MAX_HEIGHT, self.height
            )));
        }
        Ok(())
    }
}
