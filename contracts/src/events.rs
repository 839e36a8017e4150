//! Events emitted by the engine and the stablecoin.

use odra::prelude::*;
use odra::casper_types::U256;

#[odra::event]
pub struct CollateralDeposited {
    pub user: Address,
    pub token: Address,
    pub amount: U256,
}

#[odra::event]
pub struct CollateralRedeemed {
    pub redeemed_from: Address,
    pub redeemed_to: Address,
    pub token: Address,
    pub amount: U256,
}

#[odra::event]
pub struct StablecoinMinted {
    pub user: Address,
    pub amount: U256,
    pub new_debt: U256,
}

#[odra::event]
pub struct StablecoinBurned {
    pub on_behalf_of: Address,
    pub payer: Address,
    pub amount: U256,
    pub new_debt: U256,
}

#[odra::event]
pub struct Liquidated {
    pub liquidator: Address,
    pub user: Address,
    pub token: Address,
    pub debt_covered: U256,
    pub collateral_seized: U256,
}

#[odra::event]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}
