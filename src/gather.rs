use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use crate::{
    abi,
    eligibility::{self, FilterParams},
    node_list_store::NodeListStore,
    platform_node::PlatformNode,
};

/// Run one gather: fetch the current validator set, filter it, persist the survivors, and
/// return the ABI-encoded status tuple to print.
///
/// An unreachable or malformed platform node is not a crash. The consumer expects a well-formed
/// `(false, 0)` in that case, and nothing gets written, leaving any previous list intact.
pub async fn gather_node_list(
    platform_node: &impl PlatformNode,
    store: &NodeListStore,
    params: &FilterParams,
) -> Result<Vec<u8>> {
    let validators = match platform_node.get_current_validators().await {
        Ok(validators) => validators,
        Err(error) => {
            warn!(%error, "platform node unavailable, reporting failure tuple");
            return Ok(abi::encode_status_tuple(false, 0));
        }
    };

    // One clock reading for the whole run keeps the filter deterministic within it.
    let now = Utc::now().timestamp();
    let nodes = eligibility::eligible_node_ids(&validators, now, params);

    info!(
        total = validators.len(),
        eligible = nodes.len(),
        "filtered current validator set"
    );

    store.write(&nodes)?;

    Ok(abi::encode_status_tuple(true, nodes.len() as u64))
}
