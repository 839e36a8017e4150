//! Collateral Token Contract
//!
//! Freely mintable CEP-18 token used as collateral on local and test networks
//! (WETH/WBTC stand-ins). Transfers can be switched to report failure so the
//! engine's `TransferFailed` path can be exercised.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::cep18::Cep18;

/// Mock collateral token
#[odra::module]
pub struct CollateralToken {
    /// CEP-18 state
    token: SubModule<Cep18>,
    /// When false, transfer and transfer_from return false without moving tokens
    transfers_enabled: Var<bool>,
}

#[odra::module]
impl CollateralToken {
    /// Initialize with an initial balance credited to `initial_account`
    pub fn init(
        &mut self,
        name: String,
        symbol: String,
        decimals: u8,
        initial_account: Address,
        initial_balance: U256,
    ) {
        self.token.init(name, symbol, decimals);
        self.transfers_enabled.set(true);
        if !initial_balance.is_zero() {
            self.token.raw_mint(initial_account, initial_balance);
        }
    }

    pub fn name(&self) -> String {
        self.token.name()
    }

    pub fn symbol(&self) -> String {
        self.token.symbol()
    }

    pub fn decimals(&self) -> u8 {
        self.token.decimals()
    }

    pub fn total_supply(&self) -> U256 {
        self.token.total_supply()
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.token.balance_of(account)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.token.allowance(owner, spender)
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        if !self.transfers_enabled() {
            return false;
        }
        let sender = self.env().caller();
        self.token.raw_transfer(sender, recipient, amount);
        true
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.token.raw_approve(owner, spender, amount);
        true
    }

    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        if !self.transfers_enabled() {
            return false;
        }
        self.token.spend_allowance_and_transfer(owner, recipient, amount);
        true
    }

    /// Mint to any account (test networks only)
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.token.raw_mint(to, amount);
    }

    pub fn set_transfers_enabled(&mut self, enabled: bool) {
        self.transfers_enabled.set(enabled);
    }

    pub fn transfers_enabled(&self) -> bool {
        self.transfers_enabled.get().unwrap_or(true)
    }
}
