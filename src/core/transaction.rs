//! Transaction handling for blocks
//!
//! A transaction is an opaque payload identified by the SHA-256 hash of
//! its bytes. The ID is derived lazily and cached once computed.

use crate::crypto::hash::opt_hex;
use crate::crypto::{sha256, Hash};
use serde::{Deserialize, Serialize};

/// A blockchain transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID (hash of `data`), absent until computed
    #[serde(default, with = "opt_hex")]
    pub id: Option<Hash>,
    /// Transaction payload
    #[serde(default, with = "opt_hex")]
    pub data: Option<Vec<u8>>,
}

impl Transaction {
    /// Create an unidentified transaction carrying `data`
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            id: None,
            data: Some(data.into()),
        }
    }

    /// Create a transaction with a pre-assigned ID
    ///
    /// The ID is taken as given and never checked against `data`.
    pub fn with_id(id: Hash, data: Option<Vec<u8>>) -> Self {
        Self { id: Some(id), data }
    }

    /// Calculate the transaction ID from its data
    ///
    /// Returns `None` when the transaction has no data. Does not cache.
    pub fn calculate_id(&self) -> Option<Hash> {
        self.data.as_deref().map(sha256)
    }

    /// Return the cached ID, computing and caching it first if absent
    pub fn ensure_id(&mut self) -> Option<Hash> {
        if self.id.is_none() {
            self.id = self.calculate_id();
        }
        self.id
    }

    pub fn is_identified(&self) -> bool {
        self.id.is_some()
    }

    /// Get the transaction ID as a hex string
    pub fn id_hex(&self) -> Option<String> {
        self.id.map(hex::encode)
    }

    /// Bytes this transaction contributes as a merkle leaf
    pub(crate) fn leaf(&self) -> &[u8] {
        match &self.id {
            Some(id) => id.as_slice(),
            None => &[],
        }
    }
}
