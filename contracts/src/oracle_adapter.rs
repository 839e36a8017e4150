//! Price Oracle Adapter
//!
//! Turns a feed answer into the canonical 18-decimal USD fixed point used by
//! every valuation in the engine, and converts between token amounts and
//! USD values at that price.
//!
//! - Rejects non-positive and stale answers (`InvalidPrice`)
//! - Normalizes any feed precision to 18 decimals
//! - Truncates toward zero in both directions (never in the caller's favor)

use odra::prelude::*;
use odra::casper_types::{U256, RuntimeArgs};
use odra::CallDef;
use crate::errors::DscError;
use crate::types::PriceData;

/// Canonical USD precision (1e18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Canonical decimal places
pub const PRECISION_DECIMALS: u8 = 18;

/// Default feed precision (8 decimals)
pub const DEFAULT_FEED_DECIMALS: u8 = 8;

/// Scale from an 8-decimal feed answer to 18 decimals (1e10)
pub const ADDITIONAL_FEED_PRECISION: u128 = 10_000_000_000;

/// Maximum age of a feed answer, in block-time milliseconds (3 hours)
pub const DEFAULT_MAX_PRICE_AGE: u64 = 3 * 60 * 60 * 1000;

/// 10^exp as U256
pub fn pow10(exp: u8) -> U256 {
    U256::from(10u64).pow(U256::from(exp))
}

/// Normalize a raw feed answer to 18-decimal USD per whole token.
pub fn normalize_price(answer: i64, feed_decimals: u8) -> Result<U256, DscError> {
    if answer <= 0 {
        return Err(DscError::InvalidPrice);
    }
    let raw = U256::from(answer as u64);

    let price = if feed_decimals <= PRECISION_DECIMALS {
        raw.checked_mul(pow10(PRECISION_DECIMALS - feed_decimals))
            .ok_or(DscError::MathOverflow)?
    } else {
        raw / pow10(feed_decimals - PRECISION_DECIMALS)
    };

    // A feed with excess precision can still truncate to zero
    if price.is_zero() {
        return Err(DscError::InvalidPrice);
    }
    Ok(price)
}

/// Reject answers older than `max_age`.
pub fn check_freshness(updated_at: u64, now: u64, max_age: u64) -> Result<(), DscError> {
    if now.saturating_sub(updated_at) > max_age {
        return Err(DscError::InvalidPrice);
    }
    Ok(())
}

/// Validate a feed answer and return its normalized price.
pub fn price_from_feed(data: &PriceData, now: u64, max_age: u64) -> Result<U256, DscError> {
    check_freshness(data.updated_at, now, max_age)?;
    normalize_price(data.answer, data.decimals)
}

/// USD value (18 decimals) of `amount` token units.
///
/// `usd = amount * price / 10^asset_decimals`
pub fn usd_value(amount: U256, price: U256, asset_decimals: u8) -> Result<U256, DscError> {
    let scaled = amount.checked_mul(price).ok_or(DscError::MathOverflow)?;
    Ok(scaled / pow10(asset_decimals))
}

/// Token units worth `usd_amount` (18 decimals). Inverse of [`usd_value`].
///
/// `amount = usd * 10^asset_decimals / price`
pub fn token_amount_from_usd(
    usd_amount: U256,
    price: U256,
    asset_decimals: u8,
) -> Result<U256, DscError> {
    if price.is_zero() {
        return Err(DscError::InvalidPrice);
    }
    let scaled = usd_amount
        .checked_mul(pow10(asset_decimals))
        .ok_or(DscError::MathOverflow)?;
    Ok(scaled / price)
}

/// Reads feeds through the calling contract's environment
pub struct OracleAdapter;

impl OracleAdapter {
    /// Raw answer of a feed
    pub fn latest_round_data(env: &odra::ContractEnv, feed: Address) -> PriceData {
        let call_def = CallDef::new("latest_round_data", false, RuntimeArgs::new());
        env.call_contract::<PriceData>(feed, call_def)
    }

    /// Normalized price of a feed, checked for staleness and sign
    pub fn get_price(
        env: &odra::ContractEnv,
        feed: Address,
        max_age: u64,
    ) -> Result<U256, DscError> {
        let data = Self::latest_round_data(env, feed);
        price_from_feed(&data, env.get_block_time(), max_age)
    }
}
