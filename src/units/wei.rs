use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// An amount of stake in wei, the unit the staking contract side thresholds are expressed in.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct WeiNewtype(pub u128);

impl Display for WeiNewtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let WeiNewtype(amount) = self;
        write!(f, "{amount}")
    }
}

impl From<WeiNewtype> for String {
    fn from(WeiNewtype(amount): WeiNewtype) -> Self {
        amount.to_string()
    }
}

impl FromStr for WeiNewtype {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>().map(WeiNewtype)
    }
}

impl TryFrom<String> for WeiNewtype {
    type Error = ParseIntError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<u128>().map(WeiNewtype)
    }
}

impl From<u128> for WeiNewtype {
    fn from(amount: u128) -> Self {
        WeiNewtype(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_from_str_test() {
        let wei = "350000000000".parse::<WeiNewtype>().unwrap();
        assert_eq!(wei, WeiNewtype(350_000_000_000));
    }

    #[test]
    fn ordering_test() {
        assert!(WeiNewtype(1) < WeiNewtype(2));
    }
}
