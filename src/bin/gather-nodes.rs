use alloy_primitives::hex;
use anyhow::Result;
use clap::Parser;

use node_gatherer::{
    gather_node_list, log, FilterParams, NodeListStore, PlatformNodeHttp, WeiNewtype,
};

/// Fetch the current validator set from the platform node, filter it down to the nodes worth
/// uploading to the oracle, and persist the list. Prints the ABI-encoded `(bool, uint256)`
/// status tuple on stdout.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Seconds a validator must have left in its staking period.
    stake_period_seconds: i64,

    /// Smallest stake we would place, in wei.
    small_stake_threshold_wei: WeiNewtype,
}

#[tokio::main]
async fn main() -> Result<()> {
    log::init();

    let cli = Cli::parse();

    // Bad parameters are fatal before any I/O happens.
    let params = FilterParams::new(cli.stake_period_seconds, cli.small_stake_threshold_wei)?;

    let platform_node = PlatformNodeHttp::new();
    let store = NodeListStore::new();

    let encoded = gather_node_list(&platform_node, &store, &params).await?;
    println!("{}", hex::encode_prefixed(encoded));

    Ok(())
}
