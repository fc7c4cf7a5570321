use alloy_primitives::hex;
use anyhow::{bail, Result};
use clap::Parser;

use node_gatherer::{encode_string_array, log, read_batch, NodeListStore};

/// Read one batch of the persisted node list and print it as an ABI-encoded `(string[])` on
/// stdout, for relaying into the oracle contract.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of node IDs per batch.
    batch_size: usize,

    /// Zero-based index of the first node ID to return.
    start_offset: usize,
}

fn main() -> Result<()> {
    log::init();

    let cli = Cli::parse();

    if cli.batch_size == 0 {
        bail!("invalid batch size: 0, expected a positive number of node IDs");
    }

    let store = NodeListStore::new();
    let nodes = store.read()?;

    match read_batch(&nodes, cli.start_offset, cli.batch_size) {
        Ok(batch) => {
            println!("{}", hex::encode_prefixed(encode_string_array(batch)));
            Ok(())
        }
        Err(error) => {
            // Distinct exit code so a wrapper can tell a bad offset from a missing store.
            eprintln!("{error}");
            std::process::exit(2);
        }
    }
}
