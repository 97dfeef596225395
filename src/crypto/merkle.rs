//! Merkle tree implementation for transaction integrity
//!
//! Reduces an ordered list of transaction IDs to a single root by
//! repeatedly hashing adjacent pairs. When a level has an odd number of
//! nodes the last one is paired with itself. This also applies to a
//! single leaf, so the root of `[x]` is `sha256(x ++ x)` and never `x`.

use super::hash::{hash_from_hex, hash_pair, Hash, HashError, ZERO_HASH};
use log::debug;

/// Calculate the merkle root from a list of leaf hashes
///
/// Returns [`ZERO_HASH`] when there are no leaves. Leaves are raw byte
/// strings; a transaction without an ID contributes an empty leaf.
pub fn merkle_root<L: AsRef<[u8]>>(leaves: &[L]) -> Hash {
    if leaves.is_empty() {
        return ZERO_HASH;
    }

    let mut current_level = next_level(leaves);

    while current_level.len() > 1 {
        current_level = next_level(&current_level);
    }

    current_level[0]
}

/// Calculate merkle root from hex-encoded hashes
pub fn merkle_root_hex(hex_hashes: &[String]) -> Result<String, HashError> {
    let hashes = hex_hashes
        .iter()
        .map(|h| hash_from_hex(h))
        .collect::<Result<Vec<Hash>, _>>()?;
    Ok(hex::encode(merkle_root(&hashes)))
}

/// Hash one level into the next, duplicating the last node if the count is odd
fn next_level<L: AsRef<[u8]>>(level: &[L]) -> Vec<Hash> {
    let next: Vec<Hash> = level
        .chunks(2)
        .map(|pair| {
            let left = pair[0].as_ref();
            let right = pair.get(1).map_or(left, |r| r.as_ref());
            hash_pair(left, right)
        })
        .collect();

    debug!("Merkle level reduced {} -> {} nodes", level.len(), next.len());
    next
}

/// A fully materialized merkle tree, kept level by level
///
/// Level 0 holds the leaves and the last level holds the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerkleTree {
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Build the tree using the same reduction as [`merkle_root`]
    pub fn build(leaves: &[Hash]) -> Self {
        if leaves.is_empty() {
            return Self::default();
        }

        let mut levels = vec![leaves.to_vec(), next_level(leaves)];

        while let Some(top) = levels.last().filter(|level| level.len() > 1) {
            let next = next_level(top);
            levels.push(next);
        }

        Self { levels }
    }

    /// The root hash, or [`ZERO_HASH`] for an empty tree
    pub fn root(&self) -> Hash {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or(ZERO_HASH)
    }

    /// All levels, leaves first
    pub fn levels(&self) -> &[Vec<Hash>] {
        &self.levels
    }

    /// Number of hashing passes between the leaves and the root
    pub fn depth(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }
}
