//! Cryptographic hashing utilities for blocks
//!
//! Provides the SHA-256 digest type used for transaction IDs and
//! merkle tree nodes, plus hex helpers for rendering and parsing it.

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Size of a digest in bytes
pub const HASH_SIZE: usize = 32;

/// A SHA-256 digest
pub type Hash = [u8; HASH_SIZE];

/// The all-zero digest, used as the merkle root of an empty block
pub const ZERO_HASH: Hash = [0u8; HASH_SIZE];

/// Errors raised when parsing a digest from text
#[derive(Error, Debug)]
pub enum HashError {
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Invalid hash length: expected {} bytes, got {0}", HASH_SIZE)]
    InvalidLength(usize),
}

/// Computes SHA-256 hash of the input data
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Computes SHA-256 hash and returns it as a hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Hashes the concatenation `left ++ right` with no separator or length prefix
pub fn hash_pair(left: &[u8], right: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Parse a 32-byte digest from a hex string
pub fn hash_from_hex(hex_str: &str) -> Result<Hash, HashError> {
    let bytes = hex::decode(hex_str.trim())?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| HashError::InvalidLength(bytes.len()))
}

/// Serde adapter rendering `Option<bytes>` as an optional hex string
pub mod opt_hex {
    use hex::FromHex;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::fmt::Display;

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<[u8]>,
    {
        match value {
            Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromHex,
        T::Error: Display,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| T::from_hex(s).map_err(de::Error::custom))
            .transpose()
    }
}
