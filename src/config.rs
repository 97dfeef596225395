//! Block factory configuration

use serde::{Deserialize, Serialize};

/// Default difficulty target stored in new block headers
pub const DEFAULT_BITS: u32 = 24;

/// Settings applied to every block the factory assembles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockConfig {
    /// Difficulty target written to the `bits` header field
    #[serde(default = "default_bits")]
    pub bits: u32,
}

fn default_bits() -> u32 {
    DEFAULT_BITS
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self { bits: DEFAULT_BITS }
    }
}

impl BlockConfig {
    pub fn with_bits(bits: u32) -> Self {
        Self { bits }
    }
}
