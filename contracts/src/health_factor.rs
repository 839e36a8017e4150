//! Health factor model.
//!
//! `health_factor = (collateral_usd * LIQUIDATION_THRESHOLD / LIQUIDATION_PRECISION) * PRECISION / debt`
//!
//! With a 50% threshold an account must hold $2 of collateral per $1 of
//! stablecoin to stay at the minimum health factor of 1.0 (1e18).

use odra::casper_types::U256;
use crate::oracle_adapter::PRECISION;

/// Share of collateral value counted toward solvency (50%)
pub const LIQUIDATION_THRESHOLD: u64 = 50;

/// Denominator for threshold and bonus percentages
pub const LIQUIDATION_PRECISION: u64 = 100;

/// Extra collateral paid to a liquidator (10%)
pub const LIQUIDATION_BONUS: u64 = 10;

/// Minimum health factor (1.0, scaled by 1e18)
pub const MIN_HEALTH_FACTOR: u128 = PRECISION;

/// Collateral value after the liquidation threshold discount
pub fn adjusted_collateral(collateral_value_usd: U256) -> U256 {
    collateral_value_usd
        .checked_mul(U256::from(LIQUIDATION_THRESHOLD))
        .map(|v| v / U256::from(LIQUIDATION_PRECISION))
        // Divide first when the product overflows
        .unwrap_or_else(|| {
            collateral_value_usd / U256::from(LIQUIDATION_PRECISION) * U256::from(LIQUIDATION_THRESHOLD)
        })
}

/// Health factor of a position, scaled by 1e18.
///
/// Zero debt is unconditionally healthy and maps to `U256::MAX`.
/// Saturates at `U256::MAX` for collateral values too large to scale.
pub fn calculate_health_factor(debt_minted: U256, collateral_value_usd: U256) -> U256 {
    if debt_minted.is_zero() {
        return U256::MAX;
    }
    adjusted_collateral(collateral_value_usd)
        .checked_mul(U256::from(PRECISION))
        .map(|scaled| scaled / debt_minted)
        .unwrap_or(U256::MAX)
}

/// Whether a health factor meets the minimum
pub fn is_healthy(health_factor: U256) -> bool {
    health_factor >= U256::from(MIN_HEALTH_FACTOR)
}

/// Bonus collateral owed to a liquidator on top of `collateral_amount`
pub fn liquidation_bonus(collateral_amount: U256) -> U256 {
    collateral_amount * U256::from(LIQUIDATION_BONUS) / U256::from(LIQUIDATION_PRECISION)
}
