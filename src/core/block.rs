//! Block implementation
//!
//! A block contains a header with linkage and integrity metadata and a
//! list of transactions summarized by the header's merkle root.

use crate::config::BlockConfig;
use crate::core::transaction::Transaction;
use crate::crypto::{merkle_root, Hash, ZERO_HASH};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Block header containing metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Hash of the previous block (empty for a genesis block)
    #[serde(with = "hex")]
    pub prev_block_hash: Vec<u8>,
    /// Merkle root of all transaction IDs
    #[serde(with = "hex")]
    pub merkle_root: Hash,
    /// Block creation time in seconds since the Unix epoch
    pub timestamp: i64,
    /// Difficulty target (carried, not interpreted)
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn merkle_root_hex(&self) -> String {
        hex::encode(self.merkle_root)
    }

    pub fn prev_block_hash_hex(&self) -> String {
        hex::encode(&self.prev_block_hash)
    }

    pub fn is_genesis(&self) -> bool {
        self.prev_block_hash.is_empty()
    }
}

/// A block in the blockchain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block header
    pub header: BlockHeader,
    /// List of transactions in the block, in merkle leaf order
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create a new block with the default configuration
    pub fn new(prev_block_hash: Vec<u8>, transactions: Vec<Transaction>) -> Self {
        Self::with_config(prev_block_hash, transactions, &BlockConfig::default())
    }

    /// Create a block with no predecessor
    pub fn genesis(transactions: Vec<Transaction>) -> Self {
        Self::new(Vec::new(), transactions)
    }

    /// Create a new block
    ///
    /// Missing transaction IDs are computed and cached in list order, then
    /// the merkle root is taken over the IDs. IDs that are already present
    /// are used as-is.
    pub fn with_config(
        prev_block_hash: Vec<u8>,
        transactions: Vec<Transaction>,
        config: &BlockConfig,
    ) -> Self {
        let header = BlockHeader {
            prev_block_hash,
            merkle_root: ZERO_HASH,
            timestamp: Utc::now().timestamp(),
            bits: config.bits,
            nonce: 0,
        };

        let mut block = Self {
            header,
            transactions,
        };
        block.header.merkle_root = block.calculate_merkle_root();

        debug!(
            "Created block with {} transaction(s), merkle root {}",
            block.tx_count(),
            block.header.merkle_root_hex()
        );

        block
    }

    /// Calculate the merkle root from transactions, assigning missing IDs
    ///
    /// The result is returned, not stored in the header.
    pub fn calculate_merkle_root(&mut self) -> Hash {
        for (index, tx) in self.transactions.iter_mut().enumerate() {
            if tx.ensure_id().is_none() {
                warn!(
                    "Transaction {} has no data, using an empty merkle leaf",
                    index
                );
            }
        }

        let leaves: Vec<&[u8]> = self.transactions.iter().map(Transaction::leaf).collect();
        merkle_root(&leaves)
    }

    /// Verify the header's merkle root against the current transactions
    pub fn verify_merkle_root(&self) -> bool {
        let ids: Vec<Option<Hash>> = self
            .transactions
            .iter()
            .map(|tx| tx.id.or_else(|| tx.calculate_id()))
            .collect();

        let leaves: Vec<&[u8]> = ids
            .iter()
            .map(|id| id.as_ref().map_or(&[][..], |h| &h[..]))
            .collect();

        merkle_root(&leaves) == self.header.merkle_root
    }

    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    /// Get number of transactions in this block
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }

    /// The header timestamp as a UTC date, if it is in chrono's range
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.header.timestamp, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BITS;
    use crate::crypto::{hash_pair, sha256};

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::new("tx1"),
            Transaction::new("tx2"),
            Transaction::new("tx3"),
        ]
    }

    #[test]
    fn test_block_header_defaults() {
        let before = Utc::now().timestamp();
        let block = Block::new(vec![0xab; 32], sample_transactions());
        let after = Utc::now().timestamp();

        assert_eq!(block.header.prev_block_hash, vec![0xab; 32]);
        assert_eq!(block.header.nonce, 0);
        assert_eq!(block.header.bits, DEFAULT_BITS);
        assert!(block.header.timestamp >= before && block.header.timestamp <= after);
        assert!(block.datetime().is_some());
    }

    #[test]
    fn test_block_with_config_bits() {
        let block = Block::with_config(vec![], vec![], &BlockConfig::with_bits(8));
        assert_eq!(block.header.bits, 8);
    }

    #[test]
    fn test_block_assigns_ids() {
        let block = Block::new(vec![], sample_transactions());

        for tx in &block.transactions {
            assert_eq!(tx.id, tx.calculate_id());
        }
    }

    #[test]
    fn test_block_merkle_root() {
        let block = Block::new(vec![], sample_transactions());

        let (x, y, z) = (sha256(b"tx1"), sha256(b"tx2"), sha256(b"tx3"));
        let expected = hash_pair(&hash_pair(&x, &y), &hash_pair(&z, &z));
        assert_eq!(block.header.merkle_root, expected);
    }

    #[test]
    fn test_empty_block_merkle_root() {
        let block = Block::genesis(vec![]);
        assert_eq!(block.header.merkle_root, ZERO_HASH);
        assert!(block.header.is_genesis());
        assert_eq!(block.tx_count(), 0);
    }

    #[test]
    fn test_block_keeps_preset_ids() {
        let bogus = sha256(b"not the data");
        let transactions = vec![
            Transaction::with_id(bogus, Some(b"tx1".to_vec())),
            Transaction::new("tx2"),
        ];

        let block = Block::new(vec![1, 2, 3], transactions);

        assert_eq!(block.transactions[0].id, Some(bogus));
        assert_eq!(block.transactions[1].id, Some(sha256(b"tx2")));
        assert_eq!(
            block.header.merkle_root,
            merkle_root(&[bogus, sha256(b"tx2")])
        );
    }

    #[test]
    fn test_block_transaction_without_data() {
        let transactions = vec![Transaction::new("tx1"), Transaction::default()];
        let block = Block::new(vec![], transactions);

        assert_eq!(block.transactions[1].id, None);
        assert_eq!(block.header.merkle_root, sha256(&sha256(b"tx1")));
        assert!(block.verify_merkle_root());
    }

    #[test]
    fn test_transaction_order_matters() {
        let forward = Block::new(vec![], sample_transactions());

        let mut reversed_txs = sample_transactions();
        reversed_txs.reverse();
        let reversed = Block::new(vec![], reversed_txs);

        assert_ne!(forward.header.merkle_root, reversed.header.merkle_root);
    }

    #[test]
    fn test_merkle_root_is_snapshot() {
        let mut block = Block::new(vec![], sample_transactions());
        let root = block.header.merkle_root;
        assert!(block.verify_merkle_root());

        block.transactions.push(Transaction::new("tx4"));
        assert_eq!(block.header.merkle_root, root);
        assert!(!block.verify_merkle_root());

        let recalculated = block.calculate_merkle_root();
        assert_ne!(recalculated, root);
        assert_eq!(block.transactions[3].id, Some(sha256(b"tx4")));
    }

    #[test]
    fn test_merkle_root_verification_detects_tampering() {
        let mut block = Block::new(vec![], sample_transactions());
        assert!(block.verify_merkle_root());

        block.transactions[0].id = Some(sha256(b"tampered"));
        assert!(!block.verify_merkle_root());
    }

    #[test]
    fn test_block_json_roundtrip() {
        let block = Block::new(vec![0xff, 0x00], sample_transactions());
        let json = serde_json::to_value(&block).unwrap();

        assert_eq!(json["header"]["prev_block_hash"], "ff00");
        assert_eq!(json["header"]["merkle_root"], block.header.merkle_root_hex());

        let decoded: Block = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, block);
    }
}
