//! Serde helpers for the P-Chain API, which encodes every number as a JSON string.

use serde::{de, Deserialize, Deserializer};

pub fn i64_from_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let s: &str = Deserialize::deserialize(deserializer)?;
    s.parse::<i64>().map_err(|error| {
        de::Error::invalid_value(
            de::Unexpected::Str(&format!("unexpected value: {}, error: {}", s, error)),
            &"a number as string e.g. \"1688169600\", which fits within i64",
        )
    })
}

/// Parse a decimal percent string like `"2.0000"` into integer basis points (200).
///
/// Stays off the float path on purpose. Fees are compared against a hard basis-point cap, and
/// `2.001` percent must land above a 200 bps cap, so any non-zero digit past the second
/// fractional place rounds the result up.
pub fn basis_points_from_percent_string(s: &str) -> Result<u32, String> {
    let (whole_part, frac_part) = match s.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (s, ""),
    };

    if whole_part.is_empty() && frac_part.is_empty() {
        return Err(format!("not a decimal percent: {s}"));
    }

    let whole: u32 = if whole_part.is_empty() {
        0
    } else {
        whole_part
            .parse()
            .map_err(|error| format!("not a decimal percent: {s}, error: {error}"))?
    };

    if !frac_part.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(format!("not a decimal percent: {s}"));
    }

    let mut frac_digits = frac_part.bytes().map(|byte| (byte - b'0') as u32);
    let tenths = frac_digits.next().unwrap_or(0);
    let hundredths = frac_digits.next().unwrap_or(0);
    let round_up = frac_digits.any(|digit| digit != 0);

    whole
        .checked_mul(100)
        .and_then(|bps| bps.checked_add(tenths * 10 + hundredths))
        .and_then(|bps| bps.checked_add(round_up.into()))
        .ok_or_else(|| format!("percent out of range: {s}"))
}

pub fn from_percent_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let s: &str = Deserialize::deserialize(deserializer)?;
    basis_points_from_percent_string(s).map_err(de::Error::custom)
}
