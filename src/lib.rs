//! pow-block: a single blockchain block and its merkle root
//!
//! This crate provides:
//! - Transactions identified by the SHA-256 hash of their payload
//! - Merkle root calculation over ordered transaction IDs
//! - Block assembly (header fields, ID assignment, merkle root)
//! - A plain, append-only blockchain container
//!
//! # Example
//!
//! ```rust
//! use pow_block::core::{Block, Blockchain, Transaction};
//!
//! let genesis = Block::genesis(vec![Transaction::new("coinbase")]);
//! println!("Merkle root: {}", genesis.header.merkle_root_hex());
//!
//! let mut chain = Blockchain::new();
//! chain.push(genesis);
//! assert_eq!(chain.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod crypto;

// Re-export commonly used types
pub use config::{BlockConfig, DEFAULT_BITS};
pub use core::{Block, BlockHeader, Blockchain, Transaction};
pub use crypto::{merkle_root, sha256, Hash, MerkleTree, ZERO_HASH};
