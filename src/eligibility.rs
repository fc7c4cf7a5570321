//! The static half of validator eligibility.
//!
//! Filtering is split in two layers. This one applies only criteria that are fixed for the
//! lifetime of an uploaded node list: the delegation fee, the staking period end, and stake
//! amounts already locked in. Criteria that fluctuate between upload and stake placement
//! (uptime, live delegation room) are re-checked by the oracle at report time, so nothing here
//! may try to model them. Keeping a cap on both layers also leaves room to run this one looser
//! than the oracle's if stake room ever gets tight.

use thiserror::Error;

use crate::{platform_node::Validator, units::WeiNewtype};

/// Hard cap on the delegation fee, in basis points (2.00%). A system constant, not operator
/// configurable.
pub const MAX_DELEGATION_FEE_BASIS_POINTS: u32 = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidParamsError {
    #[error("invalid stake period: {0}, expected a positive number of seconds")]
    StakePeriod(i64),
    #[error("invalid stake threshold: {0}, expected a positive amount of wei")]
    StakeThreshold(WeiNewtype),
}

/// Per-run filter parameters, validated before any I/O happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParams {
    pub stake_period_seconds: i64,
    pub small_stake_threshold_wei: WeiNewtype,
}

impl FilterParams {
    pub fn new(
        stake_period_seconds: i64,
        small_stake_threshold_wei: WeiNewtype,
    ) -> Result<Self, InvalidParamsError> {
        if stake_period_seconds <= 0 {
            return Err(InvalidParamsError::StakePeriod(stake_period_seconds));
        }
        if small_stake_threshold_wei == WeiNewtype(0) {
            return Err(InvalidParamsError::StakeThreshold(small_stake_threshold_wei));
        }
        Ok(Self {
            stake_period_seconds,
            small_stake_threshold_wei,
        })
    }
}

fn is_eligible(validator: &Validator, now: i64, params: &FilterParams) -> bool {
    // Fee above the cap guarantees exclusion from receiving stake.
    if validator.delegation_fee_bps > MAX_DELEGATION_FEE_BASIS_POINTS {
        return false;
    }

    // The validator's remaining active period must cover at least one full stake period.
    if validator.end_time.saturating_sub(now) < params.stake_period_seconds {
        return false;
    }

    // There must be room for at least the smallest stake we'd place.
    if validator.remaining_delegation_capacity().to_wei() < params.small_stake_threshold_wei {
        return false;
    }

    true
}

/// Select the node IDs worth uploading to the oracle, in response order.
///
/// `now` is captured once by the caller so a single run evaluates every validator against the
/// same clock.
pub fn eligible_node_ids(validators: &[Validator], now: i64, params: &FilterParams) -> Vec<String> {
    validators
        .iter()
        .filter(|validator| is_eligible(validator, now, params))
        .map(|validator| validator.node_id.clone())
        .collect()
}
