//! Collateral Ledger
//!
//! Per-user, per-asset collateral balances and minted debt. This is the only
//! place positions are stored; the engine reads and writes them through the
//! methods below. Valuation goes through the oracle adapter using the feed
//! bound to each asset.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::{DscError, OrRevert};
use crate::health_factor::calculate_health_factor;
use crate::oracle_adapter::{self, OracleAdapter};
use crate::types::{AccountPosition, CollateralAsset, CollateralBalance};

/// Collateral Ledger
#[odra::module]
pub struct CollateralLedger {
    /// Supported assets by token address
    assets: Mapping<Address, CollateralAsset>,
    /// Supported token addresses in registration order
    asset_list: Var<Vec<Address>>,
    /// (user, token) -> deposited amount
    collateral_deposited: Mapping<(Address, Address), U256>,
    /// user -> outstanding stablecoin debt
    dsc_minted: Mapping<Address, U256>,
    /// Maximum feed answer age
    max_price_age: Var<u64>,
}

#[odra::module]
impl CollateralLedger {
    /// Register the fixed set of supported assets
    pub fn register_assets(&mut self, assets: Vec<CollateralAsset>, max_price_age: u64) {
        let mut asset_list = Vec::with_capacity(assets.len());
        for asset in assets {
            if self.assets.get(&asset.token).is_some() {
                self.env().revert(DscError::DuplicateCollateralToken);
            }
            asset_list.push(asset.token);
            self.assets.set(&asset.token.clone(), asset);
        }
        self.asset_list.set(asset_list);
        self.max_price_age.set(max_price_age);
    }

    // ========== Asset Queries ==========

    pub fn is_supported(&self, token: Address) -> bool {
        self.assets.get(&token).map(|a| a.supported).unwrap_or(false)
    }

    pub fn asset(&self, token: Address) -> Option<CollateralAsset> {
        self.assets.get(&token)
    }

    pub fn asset_list(&self) -> Vec<Address> {
        self.asset_list.get().unwrap_or_default()
    }

    pub fn max_price_age(&self) -> u64 {
        self.max_price_age.get().unwrap_or(oracle_adapter::DEFAULT_MAX_PRICE_AGE)
    }

    // ========== Mutations ==========

    /// Credit collateral. Never checks solvency: more collateral only helps.
    pub fn deposit(&mut self, user: Address, token: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(DscError::NeedsMoreThanZero);
        }
        if !self.is_supported(token) {
            self.env().revert(DscError::NotAllowedToken);
        }
        let balance = self.collateral_balance(user, token);
        let new_balance = balance
            .checked_add(amount)
            .ok_or(DscError::MathOverflow)
            .or_revert(&self.env());
        self.collateral_deposited.set(&(user, token), new_balance);
    }

    /// Debit collateral. The caller checks the resulting health factor.
    pub fn withdraw(&mut self, user: Address, token: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(DscError::NeedsMoreThanZero);
        }
        let balance = self.collateral_balance(user, token);
        if balance < amount {
            self.env().revert(DscError::InsufficientCollateral);
        }
        self.collateral_deposited.set(&(user, token), balance - amount);
    }

    /// Record newly minted debt
    pub fn add_debt(&mut self, user: Address, amount: U256) -> U256 {
        let new_debt = self
            .debt_of(user)
            .checked_add(amount)
            .ok_or(DscError::MathOverflow)
            .or_revert(&self.env());
        self.dsc_minted.set(&user, new_debt);
        new_debt
    }

    /// Record repaid debt
    pub fn remove_debt(&mut self, user: Address, amount: U256) -> U256 {
        let debt = self.debt_of(user);
        if debt < amount {
            self.env().revert(DscError::BurnAmountExceedsDebt);
        }
        let new_debt = debt - amount;
        self.dsc_minted.set(&user, new_debt);
        new_debt
    }

    // ========== Position Queries ==========

    pub fn collateral_balance(&self, user: Address, token: Address) -> U256 {
        self.collateral_deposited.get(&(user, token)).unwrap_or(U256::zero())
    }

    pub fn debt_of(&self, user: Address) -> U256 {
        self.dsc_minted.get(&user).unwrap_or(U256::zero())
    }

    /// Sum of USD values over all deposited assets.
    ///
    /// Zero balances are skipped, so an empty account never queries a feed.
    pub fn collateral_value_usd(&self, user: Address) -> U256 {
        let mut total = U256::zero();
        for token in self.asset_list() {
            let amount = self.collateral_balance(user, token);
            if amount.is_zero() {
                continue;
            }
            let value = self.usd_value(token, amount);
            total = total
                .checked_add(value)
                .ok_or(DscError::MathOverflow)
                .or_revert(&self.env());
        }
        total
    }

    /// (debt minted, collateral value in USD)
    pub fn account_information(&self, user: Address) -> (U256, U256) {
        (self.debt_of(user), self.collateral_value_usd(user))
    }

    pub fn health_factor_of(&self, user: Address) -> U256 {
        let (debt, collateral_value) = self.account_information(user);
        calculate_health_factor(debt, collateral_value)
    }

    pub fn position(&self, user: Address) -> AccountPosition {
        let collateral = self
            .asset_list()
            .into_iter()
            .map(|token| CollateralBalance {
                token,
                amount: self.collateral_balance(user, token),
            })
            .collect();
        AccountPosition {
            user,
            collateral,
            debt_minted: self.debt_of(user),
        }
    }

    // ========== Valuation ==========

    /// USD value (18 decimals) of `amount` of `token`
    pub fn usd_value(&self, token: Address, amount: U256) -> U256 {
        let asset = self.priced_asset(token);
        let price = self.price_of(&asset);
        oracle_adapter::usd_value(amount, price, asset.decimals).or_revert(&self.env())
    }

    /// Amount of `token` worth `usd_amount` (18 decimals)
    pub fn token_amount_from_usd(&self, token: Address, usd_amount: U256) -> U256 {
        let asset = self.priced_asset(token);
        let price = self.price_of(&asset);
        oracle_adapter::token_amount_from_usd(usd_amount, price, asset.decimals)
            .or_revert(&self.env())
    }

    // ========== Internal Functions ==========

    fn priced_asset(&self, token: Address) -> CollateralAsset {
        match self.assets.get(&token) {
            Some(asset) => asset,
            None => self.env().revert(DscError::UnsupportedAsset),
        }
    }

    fn price_of(&self, asset: &CollateralAsset) -> U256 {
        OracleAdapter::get_price(&self.env(), asset.price_feed, self.max_price_age())
            .or_revert(&self.env())
    }
}
