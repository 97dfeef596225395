//! Command-line interface helpers

pub mod commands;

pub use commands::{
    build_block, cmd_block, cmd_root, cmd_txid, load_transactions, parse_transaction, CliError,
    CliResult,
};
