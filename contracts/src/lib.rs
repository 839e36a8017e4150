//! DSC Engine Contracts
//!
//! Overcollateralized synthetic dollar (DSC) backed by CEP-18 collateral.
//!
//! ## Architecture
//!
//! - **DscEngine**: Deposit, mint, burn, redeem and liquidate
//! - **CollateralLedger**: Per-user collateral balances and debt
//! - **OracleAdapter**: Feed answers normalized to 18-decimal USD
//! - **Health Factor**: Solvency ratio checked after every mutation
//! - **Stablecoin (DSC)**: CEP-18 token minted and burned only by its owner
//!
//! ## Solvency
//!
//! After any successful call, every account with debt satisfies
//! `collateral_usd * 50 / 100 >= debt`. Accounts below that line can be
//! liquidated for a 10% collateral bonus.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod oracle_adapter;
pub mod health_factor;

// Contract modules
pub mod cep18;
pub mod ledger;
pub mod engine;
pub mod stablecoin;

// Test doubles
pub mod collateral_token;
pub mod price_feed;
