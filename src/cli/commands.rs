//! CLI commands
//!
//! Implements the command handlers for the CLI interface.

use crate::config::BlockConfig;
use crate::core::{Block, Transaction};
use crate::crypto::{hash_from_hex, merkle_root_hex, HashError, MerkleTree};
use log::info;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// CLI errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Hash error: {0}")]
    Hash(#[from] HashError),
    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Load a JSON array of transactions from a file
pub fn load_transactions(path: &Path) -> CliResult<Vec<Transaction>> {
    let contents = fs::read_to_string(path)?;
    let transactions: Vec<Transaction> = serde_json::from_str(&contents)?;
    info!(
        "Loaded {} transaction(s) from {}",
        transactions.len(),
        path.display()
    );
    Ok(transactions)
}

/// Build a transaction from command-line input
///
/// `data` is taken as UTF-8 text and `hex_data` as hex bytes. With
/// neither, the transaction has no data.
pub fn parse_transaction(data: Option<&str>, hex_data: Option<&str>) -> CliResult<Transaction> {
    match (data, hex_data) {
        (Some(text), _) => Ok(Transaction::new(text)),
        (None, Some(h)) => Ok(Transaction::new(hex::decode(h.trim())?)),
        (None, None) => Ok(Transaction::default()),
    }
}

/// Assemble a block from a file of transactions and inline payloads
///
/// Transactions from `input` come first, followed by `inline` in order.
pub fn build_block(
    prev_hex: &str,
    config: &BlockConfig,
    input: Option<&Path>,
    inline: &[String],
) -> CliResult<Block> {
    let prev_block_hash = hex::decode(prev_hex.trim())?;

    let mut transactions = match input {
        Some(path) => load_transactions(path)?,
        None => Vec::new(),
    };
    transactions.extend(inline.iter().map(|text| Transaction::new(text.as_str())));

    Ok(Block::with_config(prev_block_hash, transactions, config))
}

/// Print the ID of a single transaction
pub fn cmd_txid(data: Option<&str>, hex_data: Option<&str>) -> CliResult<()> {
    let tx = parse_transaction(data, hex_data)?;

    match tx.calculate_id() {
        Some(id) => println!("{}", hex::encode(id)),
        None => println!("no identifier (transaction has no data)"),
    }

    Ok(())
}

/// Print the merkle root of hex leaves, optionally with every level
pub fn cmd_root(leaves: &[String], show_levels: bool) -> CliResult<()> {
    if !show_levels {
        println!("{}", merkle_root_hex(leaves)?);
        return Ok(());
    }

    let hashes = leaves
        .iter()
        .map(|leaf| hash_from_hex(leaf))
        .collect::<Result<Vec<_>, _>>()?;
    let tree = MerkleTree::build(&hashes);

    for (depth, level) in tree.levels().iter().enumerate() {
        println!("Level {} ({} node(s)):", depth, level.len());
        for hash in level {
            println!("   {}", hex::encode(hash));
        }
    }
    println!("Root: {}", hex::encode(tree.root()));

    Ok(())
}

/// Create a block and print it as JSON
pub fn cmd_block(
    prev_hex: &str,
    config: &BlockConfig,
    input: Option<&Path>,
    inline: &[String],
) -> CliResult<()> {
    let block = build_block(prev_hex, config, input, inline)?;

    info!(
        "Block created: {} transaction(s), merkle root {}",
        block.tx_count(),
        block.header.merkle_root_hex()
    );
    println!("{}", serde_json::to_string_pretty(&block)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{merkle_root, sha256};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_transaction() {
        let tx = parse_transaction(Some("hi"), None).unwrap();
        assert_eq!(tx.data.as_deref(), Some(&b"hi"[..]));

        let tx = parse_transaction(None, Some("6869")).unwrap();
        assert_eq!(tx.data.as_deref(), Some(&b"hi"[..]));

        let tx = parse_transaction(None, None).unwrap();
        assert_eq!(tx.calculate_id(), None);

        assert!(matches!(
            parse_transaction(None, Some("xyz")),
            Err(CliError::Hex(_))
        ));
    }

    #[test]
    fn test_load_transactions() {
        let preset = sha256(b"preset");
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"data": "747831"}}, {{"id": "{}", "data": "747832"}}, {{}}]"#,
            hex::encode(preset)
        )
        .unwrap();

        let transactions = load_transactions(file.path()).unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].id, None);
        assert_eq!(transactions[1].id, Some(preset));
        assert_eq!(transactions[2].data, None);
    }

    #[test]
    fn test_load_transactions_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            load_transactions(file.path()),
            Err(CliError::Json(_))
        ));

        let missing = file.path().with_extension("missing");
        assert!(matches!(load_transactions(&missing), Err(CliError::Io(_))));
    }

    #[test]
    fn test_build_block_from_file_and_inline() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"data": "747831"}}]"#).unwrap();

        let block = build_block(
            "00ff",
            &BlockConfig::with_bits(12),
            Some(file.path()),
            &["tx2".to_string()],
        )
        .unwrap();

        assert_eq!(block.header.prev_block_hash, vec![0x00, 0xff]);
        assert_eq!(block.header.bits, 12);
        assert_eq!(
            block.header.merkle_root,
            merkle_root(&[sha256(b"tx1"), sha256(b"tx2")])
        );
    }

    #[test]
    fn test_build_genesis_block() {
        let block = build_block("", &BlockConfig::default(), None, &[]).unwrap();
        assert!(block.header.is_genesis());
        assert_eq!(block.header.merkle_root, [0u8; 32]);
    }

    #[test]
    fn test_build_block_rejects_bad_prev_hash() {
        let result = build_block("nothex", &BlockConfig::default(), None, &[]);
        assert!(matches!(result, Err(CliError::Hex(_))));
    }

    #[test]
    fn test_cmd_root_rejects_bad_leaf() {
        let leaves = vec!["00".to_string()];
        assert!(matches!(
            cmd_root(&leaves, true),
            Err(CliError::Hash(HashError::InvalidLength(1)))
        ));
        assert!(cmd_root(&[hex::encode(sha256(b"tx1"))], false).is_ok());
    }
}
