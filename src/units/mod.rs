mod navax;
mod wei;

pub use navax::NavaxNewtype;
pub use wei::WeiNewtype;

/// The staking contract thinks in wei, the P-Chain in nAVAX.
pub const WEI_PER_NAVAX: u128 = 1_000_000_000;
