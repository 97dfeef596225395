//! Cryptographic utilities for blocks
//!
//! This module provides:
//! - SHA-256 hashing and the 32-byte digest type
//! - Merkle root calculation

pub mod hash;
pub mod merkle;

pub use hash::{
    hash_from_hex, hash_pair, sha256, sha256_hex, Hash, HashError, HASH_SIZE, ZERO_HASH,
};
pub use merkle::{merkle_root, merkle_root_hex, MerkleTree};
