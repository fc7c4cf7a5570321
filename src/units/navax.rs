use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{WeiNewtype, WEI_PER_NAVAX};

/// An amount of stake in nAVAX, the P-Chain base unit.
///
/// Stake amounts come from an untrusted API, so arithmetic saturates instead of panicking.
/// u128 leaves many orders of magnitude of headroom above any real stake, which makes
/// saturation unreachable for honest inputs while keeping capacity math total.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct NavaxNewtype(pub u128);

impl NavaxNewtype {
    pub fn saturating_add(self, NavaxNewtype(rhs): Self) -> Self {
        NavaxNewtype(self.0.saturating_add(rhs))
    }

    pub fn saturating_sub(self, NavaxNewtype(rhs): Self) -> Self {
        NavaxNewtype(self.0.saturating_sub(rhs))
    }

    pub fn saturating_mul(self, rhs: u128) -> Self {
        NavaxNewtype(self.0.saturating_mul(rhs))
    }

    pub fn to_wei(self) -> WeiNewtype {
        WeiNewtype(self.0.saturating_mul(WEI_PER_NAVAX))
    }
}

impl Display for NavaxNewtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let NavaxNewtype(amount) = self;
        write!(f, "{amount}")
    }
}

impl From<NavaxNewtype> for String {
    fn from(NavaxNewtype(amount): NavaxNewtype) -> Self {
        amount.to_string()
    }
}

impl FromStr for NavaxNewtype {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>().map(NavaxNewtype)
    }
}

impl TryFrom<String> for NavaxNewtype {
    type Error = ParseIntError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<u128>().map(NavaxNewtype)
    }
}

impl From<u128> for NavaxNewtype {
    fn from(amount: u128) -> Self {
        NavaxNewtype(amount)
    }
}
