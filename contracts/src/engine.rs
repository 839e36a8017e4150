//! DSC Engine
//!
//! Entry point for every user-facing operation. Users lock supported
//! collateral, mint DSC against it up to the liquidation threshold, burn DSC
//! to repay, redeem collateral, and liquidate undercollateralized accounts.
//!
//! Every mutating call finishes its ledger writes and health factor checks
//! before the single outbound collateral transfer. Stablecoin mint/burn goes
//! through the supply controller, which this engine owns after deployment.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::DscError;
use crate::events::{
    CollateralDeposited, CollateralRedeemed, Liquidated, StablecoinBurned, StablecoinMinted,
};
use crate::health_factor::{self, is_healthy, liquidation_bonus};
use crate::interfaces::{CollateralCep18ContractRef, SupplyControllerContractRef};
use crate::ledger::CollateralLedger;
use crate::oracle_adapter::{self, ADDITIONAL_FEED_PRECISION, PRECISION};
use crate::types::{AccountPosition, CollateralAsset};

/// DSC Engine Contract
#[odra::module(events = [
    CollateralDeposited,
    CollateralRedeemed,
    StablecoinMinted,
    StablecoinBurned,
    Liquidated
])]
pub struct DscEngine {
    /// Positions and supported assets
    ledger: SubModule<CollateralLedger>,
    /// Stablecoin this engine mints and burns
    dsc: Var<Address>,
}

#[odra::module]
impl DscEngine {
    /// Initialize with positionally paired collateral tokens and price feeds
    pub fn init(
        &mut self,
        token_addresses: Vec<Address>,
        price_feed_addresses: Vec<Address>,
        dsc_address: Address,
    ) {
        if token_addresses.len() != price_feed_addresses.len() {
            self.env()
                .revert(DscError::TokenAddressAndPriceFeedAddressesMustBeSameLength);
        }

        let assets = token_addresses
            .into_iter()
            .zip(price_feed_addresses)
            .map(|(token, price_feed)| CollateralAsset {
                token,
                price_feed,
                decimals: CollateralCep18ContractRef::new(self.env().clone(), token).decimals(),
                supported: true,
            })
            .collect();

        self.ledger
            .register_assets(assets, oracle_adapter::DEFAULT_MAX_PRICE_AGE);
        self.dsc.set(dsc_address);
    }

    // ========== Collateral ==========

    /// Lock `amount` of `token` as collateral
    pub fn deposit_collateral(&mut self, token: Address, amount: U256) {
        let user = self.env().caller();
        self.ledger.deposit(user, token, amount);
        self.env().emit_event(CollateralDeposited { user, token, amount });

        let engine = self.env().self_address();
        let success =
            CollateralCep18ContractRef::new(self.env().clone(), token).transfer_from(user, engine, amount);
        if !success {
            self.env().revert(DscError::TransferFailed);
        }
    }

    /// Withdraw collateral; the remaining position must stay healthy
    pub fn redeem_collateral(&mut self, token: Address, amount: U256) {
        let user = self.env().caller();
        self.redeem(token, amount, user, user);
        self.revert_if_health_factor_is_broken(user);
        self.transfer_collateral(token, user, amount);
    }

    // ========== Stablecoin ==========

    /// Mint `amount` DSC against the caller's collateral
    pub fn mint_dsc(&mut self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(DscError::NeedsMoreThanZero);
        }
        let user = self.env().caller();
        let new_debt = self.ledger.add_debt(user, amount);
        self.revert_if_health_factor_is_broken(user);

        let minted = self.dsc_ref().mint(user, amount);
        if !minted {
            self.env().revert(DscError::MintFailed);
        }
        self.env().emit_event(StablecoinMinted { user, amount, new_debt });
    }

    /// Repay `amount` of the caller's debt
    pub fn burn_dsc(&mut self, amount: U256) {
        let user = self.env().caller();
        self.burn(amount, user, user);
        // Repaying never lowers the health factor
        self.revert_if_health_factor_is_broken(user);
    }

    // ========== Compositions ==========

    /// Deposit collateral and mint DSC in one call
    pub fn deposit_collateral_and_mint_dsc(
        &mut self,
        token: Address,
        collateral_amount: U256,
        amount_dsc_to_mint: U256,
    ) {
        self.deposit_collateral(token, collateral_amount);
        self.mint_dsc(amount_dsc_to_mint);
    }

    /// Burn DSC and redeem collateral in one call
    pub fn redeem_collateral_for_dsc(
        &mut self,
        token: Address,
        collateral_amount: U256,
        amount_dsc_to_burn: U256,
    ) {
        self.burn_dsc(amount_dsc_to_burn);
        self.redeem_collateral(token, collateral_amount);
    }

    // ========== Liquidation ==========

    /// Repay `debt_to_cover` of an unhealthy `user` and seize the matching
    /// collateral plus the liquidation bonus.
    pub fn liquidate(&mut self, collateral: Address, user: Address, debt_to_cover: U256) {
        if debt_to_cover.is_zero() {
            self.env().revert(DscError::NeedsMoreThanZero);
        }
        if !self.ledger.is_supported(collateral) {
            self.env().revert(DscError::NotAllowedToken);
        }

        let starting_health_factor = self.ledger.health_factor_of(user);
        if is_healthy(starting_health_factor) {
            self.env().revert(DscError::HealthFactorOk);
        }
        if debt_to_cover > self.ledger.debt_of(user) {
            self.env().revert(DscError::BurnAmountExceedsDebt);
        }

        let token_amount = self.ledger.token_amount_from_usd(collateral, debt_to_cover);
        let total_collateral = token_amount
            .checked_add(liquidation_bonus(token_amount))
            .unwrap_or_else(|| self.env().revert(DscError::MathOverflow));

        let liquidator = self.env().caller();
        self.redeem(collateral, total_collateral, user, liquidator);
        self.burn(debt_to_cover, user, liquidator);

        let ending_health_factor = self.ledger.health_factor_of(user);
        if ending_health_factor <= starting_health_factor {
            self.env().revert(DscError::HealthFactorNotImproved);
        }
        self.revert_if_health_factor_is_broken(liquidator);

        self.transfer_collateral(collateral, liquidator, total_collateral);
        self.env().emit_event(Liquidated {
            liquidator,
            user,
            token: collateral,
            debt_covered: debt_to_cover,
            collateral_seized: total_collateral,
        });
    }

    // ========== Valuation Queries ==========

    pub fn get_usd_value(&self, token: Address, amount: U256) -> U256 {
        self.ledger.usd_value(token, amount)
    }

    pub fn get_token_amount_from_usd(&self, token: Address, usd_amount: U256) -> U256 {
        self.ledger.token_amount_from_usd(token, usd_amount)
    }

    /// (total DSC minted, collateral value in USD)
    pub fn get_account_information(&self, user: Address) -> (U256, U256) {
        self.ledger.account_information(user)
    }

    pub fn get_account_collateral_value(&self, user: Address) -> U256 {
        self.ledger.collateral_value_usd(user)
    }

    pub fn get_health_factor(&self, user: Address) -> U256 {
        self.ledger.health_factor_of(user)
    }

    pub fn calculate_health_factor(
        &self,
        total_dsc_minted: U256,
        collateral_value_in_usd: U256,
    ) -> U256 {
        health_factor::calculate_health_factor(total_dsc_minted, collateral_value_in_usd)
    }

    // ========== Position Queries ==========

    pub fn get_collateral_balance_of_user(&self, user: Address, token: Address) -> U256 {
        self.ledger.collateral_balance(user, token)
    }

    pub fn get_collateral_tokens(&self) -> Vec<Address> {
        self.ledger.asset_list()
    }

    pub fn get_collateral_asset(&self, token: Address) -> Option<CollateralAsset> {
        self.ledger.asset(token)
    }

    pub fn get_account_position(&self, user: Address) -> AccountPosition {
        self.ledger.position(user)
    }

    pub fn get_dsc(&self) -> Option<Address> {
        self.dsc.get()
    }

    // ========== Constants ==========

    pub fn get_precision(&self) -> U256 {
        U256::from(PRECISION)
    }

    pub fn get_additional_feed_precision(&self) -> U256 {
        U256::from(ADDITIONAL_FEED_PRECISION)
    }

    pub fn get_liquidation_threshold(&self) -> U256 {
        U256::from(health_factor::LIQUIDATION_THRESHOLD)
    }

    pub fn get_liquidation_precision(&self) -> U256 {
        U256::from(health_factor::LIQUIDATION_PRECISION)
    }

    pub fn get_liquidation_bonus(&self) -> U256 {
        U256::from(health_factor::LIQUIDATION_BONUS)
    }

    pub fn get_min_health_factor(&self) -> U256 {
        U256::from(health_factor::MIN_HEALTH_FACTOR)
    }

    pub fn get_max_price_age(&self) -> u64 {
        self.ledger.max_price_age()
    }

    // ========== Internal Functions ==========

    /// Debit `from`'s collateral on behalf of `to`. No transfer yet.
    fn redeem(&mut self, token: Address, amount: U256, from: Address, to: Address) {
        self.ledger.withdraw(from, token, amount);
        self.env().emit_event(CollateralRedeemed {
            redeemed_from: from,
            redeemed_to: to,
            token,
            amount,
        });
    }

    /// Burn `amount` DSC paid by `payer` against `on_behalf_of`'s debt.
    /// The supply contracts before the debt is reduced.
    fn burn(&mut self, amount: U256, on_behalf_of: Address, payer: Address) {
        if amount.is_zero() {
            self.env().revert(DscError::NeedsMoreThanZero);
        }
        if amount > self.ledger.debt_of(on_behalf_of) {
            self.env().revert(DscError::BurnAmountExceedsDebt);
        }

        let engine = self.env().self_address();
        let mut dsc = self.dsc_ref();
        if !dsc.transfer_from(payer, engine, amount) {
            self.env().revert(DscError::TransferFailed);
        }
        dsc.burn(amount);

        let new_debt = self.ledger.remove_debt(on_behalf_of, amount);
        self.env().emit_event(StablecoinBurned {
            on_behalf_of,
            payer,
            amount,
            new_debt,
        });
    }

    fn transfer_collateral(&self, token: Address, to: Address, amount: U256) {
        let success = CollateralCep18ContractRef::new(self.env().clone(), token).transfer(to, amount);
        if !success {
            self.env().revert(DscError::TransferFailed);
        }
    }

    fn revert_if_health_factor_is_broken(&self, user: Address) {
        if !is_healthy(self.ledger.health_factor_of(user)) {
            self.env().revert(DscError::BreaksHealthFactor);
        }
    }

    fn dsc_ref(&self) -> SupplyControllerContractRef {
        let dsc = self.dsc.get_or_revert_with(DscError::StablecoinNotSet);
        SupplyControllerContractRef::new(self.env().clone(), dsc)
    }
}
