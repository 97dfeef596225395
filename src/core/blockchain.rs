//! Blockchain container
//!
//! An ordered, append-only sequence of blocks. The container does not
//! validate blocks or check their linkage; callers decide what to push.

use crate::core::block::Block;
use serde::{Deserialize, Serialize};

/// The main blockchain structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blockchain {
    blocks: Vec<Block>,
}

impl Blockchain {
    /// Create an empty blockchain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block to the end of the chain
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Get the latest block
    pub fn latest_block(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Get a block by its position in the chain
    pub fn get_block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
