//! Core block components
//!
//! This module contains the data model:
//! - Transactions (payloads with lazily derived SHA-256 IDs)
//! - Blocks (header plus transactions, merkle root computed on creation)
//! - Blockchain (ordered container of blocks)

pub mod block;
pub mod blockchain;
pub mod transaction;

pub use block::{Block, BlockHeader};
pub use blockchain::Blockchain;
pub use transaction::Transaction;
