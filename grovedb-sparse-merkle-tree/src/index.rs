//! Mapping from a selecting byte string to flattened node indices.
//!
//! The byte string is read as an unsigned big-endian integer and only its low
//! `height - 1` bits matter, so longer inputs alias into the same window of
//! `2^(height-1)` leaf slots.
//!
//! Callers pass a height already checked against `MIN_HEIGHT..=MAX_HEIGHT`;
//! these helpers do not validate it.

/// The low `height - 1` bits of `data` read as a big-endian integer, least
/// significant bit first. Missing high bytes read as zero.
pub(crate) fn to_bit_vector(data: &[u8], height: u8) -> Vec<bool> {
    let bits = height.saturating_sub(1) as usize;
    (0..bits)
        .map(|i| {
            let byte_from_end = i / 8;
            if byte_from_end >= data.len() {
                return false;
            }
            let byte = data[data.len() - 1 - byte_from_end];
            (byte >> (i % 8)) & 1 == 1
        })
        .collect()
}

/// Interpret `bits` (least significant first) as an integer.
fn from_bit_vector(bits: &[bool]) -> u64 {
    bits.iter()
        .enumerate()
        .filter(|(_, bit)| **bit)
        .fold(0, |acc, (i, _)| acc | (1u64 << i))
}

/// Flattened node indices from the leaf selected by `data` up to, but not
/// including, the root. The result has `height - 1` entries.
///
/// Level `h` starts at index `2^(height-h-1) - 1`; the offset within the
/// level is the bit vector with its `h` lowest bits dropped.
pub(crate) fn leaf_path(data: &[u8], height: u8) -> Vec<u64> {
    let bits = to_bit_vector(data, height);
    (0..bits.len())
        .map(|h| {
            let level_start = (1u64 << (bits.len() - h)) - 1;
            level_start + from_bit_vector(&bits[h..])
        })
        .collect()
}

/// Index of the other child of `index`'s parent.
///
/// Siblings are stored as consecutive (odd, even) pairs, so odd indices pair
/// with the next index and even ones with the previous. `index` must not be
/// the root.
pub(crate) fn sibling_index(index: u64) -> u64 {
    debug_assert!(index > 0, "the root has no sibling");
    if index & 1 == 1 { index + 1 } else { index - 1 }
}
