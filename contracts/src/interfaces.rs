//! External contract interfaces used by the engine.

use odra::prelude::*;
use odra::casper_types::U256;

/// CEP-18 collateral token
#[odra::external_contract]
pub trait CollateralCep18 {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn decimals(&self) -> u8;
}

/// Stablecoin supply controller, owned by the engine
#[odra::external_contract]
pub trait SupplyController {
    fn mint(&mut self, to: Address, amount: U256) -> bool;
    fn burn(&mut self, amount: U256);
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
}
