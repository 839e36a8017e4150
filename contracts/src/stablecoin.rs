//! DSC Stablecoin Contract
//!
//! CEP-18 compatible stablecoin whose supply is controlled by a single owner.
//! Ownership is handed to the engine at deployment, after which only the
//! engine can mint or burn.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::cep18::Cep18;
use crate::errors::DscError;
use crate::events::OwnershipTransferred;

const TOKEN_NAME: &str = "DecentralizedStableCoin";
const TOKEN_SYMBOL: &str = "DSC";
const TOKEN_DECIMALS: u8 = 18;

/// DSC Stablecoin Contract
#[odra::module(events = [OwnershipTransferred])]
pub struct Stablecoin {
    /// CEP-18 state
    token: SubModule<Cep18>,
    /// Sole minter/burner
    owner: Var<Address>,
}

#[odra::module]
impl Stablecoin {
    /// Initialize the stablecoin, owned by the deployer
    pub fn init(&mut self) {
        self.token
            .init(String::from(TOKEN_NAME), String::from(TOKEN_SYMBOL), TOKEN_DECIMALS);
        self.owner.set(self.env().caller());
    }

    // ========== CEP-18 Standard Functions ==========

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

    /// Transfer tokens to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.token.raw_transfer(sender, recipient, amount);
        true
    }

    /// Approve spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.token.raw_approve(owner, spender, amount);
        true
    }

    /// Transfer tokens from owner to recipient (requires allowance)
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        self.token.spend_allowance_and_transfer(owner, recipient, amount);
        true
    }

    // ========== Supply Control (Owner Only) ==========

    /// Mint new tokens
    pub fn mint(&mut self, to: Address, amount: U256) -> bool {
        self.require_owner();
        if amount.is_zero() {
            self.env().revert(DscError::NeedsMoreThanZero);
        }
        self.token.raw_mint(to, amount);
        true
    }

    /// Burn tokens held by the owner
    pub fn burn(&mut self, amount: U256) {
        self.require_owner();
        if amount.is_zero() {
            self.env().revert(DscError::NeedsMoreThanZero);
        }
        let owner = self.env().caller();
        self.token.raw_burn(owner, amount);
    }

    // ========== Ownership ==========

    /// Hand mint/burn rights to a new owner
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.require_owner();
        let previous_owner = self.env().caller();
        self.owner.set(new_owner);
        self.env().emit_event(OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }

    /// Get owner address
    pub fn get_owner(&self) -> Option<Address> {
        self.owner.get()
    }

    // ========== Internal Functions ==========

    fn require_owner(&self) {
        if self.owner.get() != Some(self.env().caller()) {
            self.env().revert(DscError::Unauthorized);
        }
    }
}
