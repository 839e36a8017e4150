//! Common types used across the engine.

use odra::prelude::*;
use odra::casper_types::U256;

/// Collateral asset accepted by the engine
#[odra::odra_type]
pub struct CollateralAsset {
    /// Collateral token contract address
    pub token: Address,
    /// Price feed bound to the token
    pub price_feed: Address,
    /// Decimal precision of the token
    pub decimals: u8,
    /// Whether deposits are accepted
    pub supported: bool,
}

/// Price feed answer as reported by the feed collaborator
#[odra::odra_type]
pub struct PriceData {
    /// Round the answer belongs to
    pub round_id: u64,
    /// Raw answer (USD per whole token, `decimals` places)
    pub answer: i64,
    /// Decimal places of `answer`
    pub decimals: u8,
    /// Block time of the last update
    pub updated_at: u64,
}

/// Balance of a single collateral asset
#[odra::odra_type]
pub struct CollateralBalance {
    /// Collateral token
    pub token: Address,
    /// Deposited amount (token smallest unit)
    pub amount: U256,
}

/// Snapshot of a user's position
#[odra::odra_type]
pub struct AccountPosition {
    /// Account owner
    pub user: Address,
    /// Deposited collateral per supported asset
    pub collateral: Vec<CollateralBalance>,
    /// Outstanding stablecoin debt
    pub debt_minted: U256,
}
