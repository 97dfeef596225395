//! pow-block CLI Application
//!
//! A command-line interface for computing transaction IDs, merkle roots
//! and blocks.

use clap::{Parser, Subcommand};
use pow_block::cli;
use pow_block::config::{BlockConfig, DEFAULT_BITS};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "powblock")]
#[command(version)]
#[command(about = "Build blocks and merkle roots over transaction lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a transaction ID
    Txid {
        /// Transaction payload as text
        #[arg(short, long, conflicts_with = "hex")]
        data: Option<String>,

        /// Transaction payload as hex bytes
        #[arg(long)]
        hex: Option<String>,
    },

    /// Compute the merkle root of hex-encoded leaf hashes
    Root {
        /// Print every level of the tree
        #[arg(short, long)]
        levels: bool,

        /// Leaf hashes (32 bytes, hex)
        leaves: Vec<String>,
    },

    /// Create a block and print it as JSON
    Block {
        /// Previous block hash (hex, empty for genesis)
        #[arg(short, long, default_value = "")]
        prev: String,

        /// Difficulty target stored in the header
        #[arg(short, long, default_value_t = DEFAULT_BITS)]
        bits: u32,

        /// JSON file with an array of transactions
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Inline transaction payloads (text), appended after --input
        #[arg(short, long = "tx")]
        txs: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Txid { data, hex } => {
            cli::cmd_txid(data.as_deref(), hex.as_deref())?;
        }

        Commands::Root { levels, leaves } => {
            cli::cmd_root(&leaves, levels)?;
        }

        Commands::Block {
            prev,
            bits,
            input,
            txs,
        } => {
            let config = BlockConfig::with_bits(bits);
            cli::cmd_block(&prev, &config, input.as_deref(), &txs)?;
        }
    }

    Ok(())
}
