//! Client for the P-Chain platform API, which knows the current validator set.
//!
//! The platform node is untrusted input. Anything that stops us from getting a well-formed
//! validator list out of it, transport failures, bad statuses, bodies missing
//! `result.validators`, surfaces as an `Err` so callers can tell a failed fetch apart from a
//! response that genuinely contains zero validators.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use mockall::automock;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::{
    env::ENV_CONFIG,
    json_codecs::{from_percent_string, i64_from_string},
    units::NavaxNewtype,
};

/// Every nAVAX of validator stake opens four nAVAX of delegation room, fixed by the protocol.
const DELEGATION_CAPACITY_FACTOR: u128 = 4;

#[derive(Debug, Clone, Deserialize)]
pub struct Delegator {
    #[serde(rename = "stakeAmount")]
    pub stake_amount: NavaxNewtype,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Validator {
    #[serde(rename = "nodeID")]
    pub node_id: String,
    #[serde(rename = "delegationFee", deserialize_with = "from_percent_string")]
    pub delegation_fee_bps: u32,
    #[serde(rename = "endTime", deserialize_with = "i64_from_string")]
    pub end_time: i64,
    #[serde(rename = "stakeAmount")]
    pub stake_amount: NavaxNewtype,
    /// Absent in the response for validators without delegators.
    #[serde(default)]
    pub delegators: Option<Vec<Delegator>>,
}

impl Validator {
    pub fn total_delegation_capacity(&self) -> NavaxNewtype {
        self.stake_amount.saturating_mul(DELEGATION_CAPACITY_FACTOR)
    }

    pub fn used_delegation_capacity(&self) -> NavaxNewtype {
        self.delegators
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .fold(NavaxNewtype(0), |sum, delegator| {
                sum.saturating_add(delegator.stake_amount)
            })
    }

    /// Free delegation room. An over-delegated row reads as zero room, not an underflow.
    pub fn remaining_delegation_capacity(&self) -> NavaxNewtype {
        self.total_delegation_capacity()
            .saturating_sub(self.used_delegation_capacity())
    }
}

#[derive(Debug, Deserialize)]
struct CurrentValidators {
    validators: Vec<Validator>,
}

/// The JSON-RPC envelope. A response without `result` (e.g. a JSON-RPC error object) fails to
/// deserialize, which is what we want.
#[derive(Debug, Deserialize)]
struct CurrentValidatorsEnvelope {
    result: CurrentValidators,
}

#[automock]
#[async_trait]
pub trait PlatformNode {
    async fn get_current_validators(&self) -> Result<Vec<Validator>>;
}

#[derive(Clone, Debug)]
pub struct PlatformNodeHttp {
    server_url: String,
    client: reqwest::Client,
}

impl PlatformNodeHttp {
    pub fn new() -> Self {
        Self::new_with_url(&ENV_CONFIG.platform_url)
    }

    pub fn new_with_url(server_url: &str) -> Self {
        Self {
            server_url: server_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for PlatformNodeHttp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformNode for PlatformNodeHttp {
    async fn get_current_validators(&self) -> Result<Vec<Validator>> {
        let url = format!("{}/ext/bc/P", self.server_url);

        let res = self
            .client
            .post(&url)
            .json(&json!({
                "jsonrpc": "2.0",
                "method": "platform.getCurrentValidators",
                "params": {},
                "id": 1,
            }))
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => {
                let envelope = res.json::<CurrentValidatorsEnvelope>().await?;
                Ok(envelope.result.validators)
            }
            status => Err(anyhow!(
                "failed to fetch current validators. status = {} url = {}",
                status,
                res.url()
            )),
        }
    }
}
