//! Engine error definitions.

use odra::prelude::*;
use odra::ContractEnv;

/// Stablecoin engine errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DscError {
    // Amount / asset errors (1xx)
    NeedsMoreThanZero = 100,
    NotAllowedToken = 101,
    InsufficientCollateral = 102,
    BurnAmountExceedsDebt = 103,

    // Oracle errors (2xx)
    UnsupportedAsset = 200,
    InvalidPrice = 201,
    MathOverflow = 202,

    // Solvency errors (3xx)
    BreaksHealthFactor = 300,
    HealthFactorOk = 301,
    HealthFactorNotImproved = 302,

    // Token errors (4xx)
    TransferFailed = 400,
    MintFailed = 401,
    BurnAmountExceedsBalance = 402,
    InsufficientAllowance = 403,
    InsufficientBalance = 404,
    Unauthorized = 405,

    // Configuration errors (9xx)
    TokenAddressAndPriceFeedAddressesMustBeSameLength = 900,
    DuplicateCollateralToken = 901,
    StablecoinNotSet = 902,
}

impl DscError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Amount / asset
            DscError::NeedsMoreThanZero => "Amount must be more than zero",
            DscError::NotAllowedToken => "Token is not an allowed collateral",
            DscError::InsufficientCollateral => "Insufficient collateral deposited",
            DscError::BurnAmountExceedsDebt => "Burn amount exceeds minted debt",

            // Oracle
            DscError::UnsupportedAsset => "No price feed for asset",
            DscError::InvalidPrice => "Price feed answer is stale or not positive",
            DscError::MathOverflow => "Fixed-point arithmetic overflow",

            // Solvency
            DscError::BreaksHealthFactor => "Health factor below minimum",
            DscError::HealthFactorOk => "Health factor is ok, account not liquidatable",
            DscError::HealthFactorNotImproved => "Liquidation did not improve health factor",

            // Token
            DscError::TransferFailed => "Token transfer failed",
            DscError::MintFailed => "Stablecoin mint failed",
            DscError::BurnAmountExceedsBalance => "Burn amount exceeds balance",
            DscError::InsufficientAllowance => "Insufficient allowance",
            DscError::InsufficientBalance => "Insufficient token balance",
            DscError::Unauthorized => "Unauthorized: caller is not owner",

            // Config
            DscError::TokenAddressAndPriceFeedAddressesMustBeSameLength => {
                "Token addresses and price feed addresses must be same length"
            }
            DscError::DuplicateCollateralToken => "Collateral token listed twice",
            DscError::StablecoinNotSet => "Stablecoin address not set",
        }
    }
}

impl core::fmt::Display for DscError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<DscError> for OdraError {
    fn from(error: DscError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}

/// Turns a math result into a value or a revert of the running call.
pub trait OrRevert<T> {
    fn or_revert(self, env: &ContractEnv) -> T;
}

impl<T> OrRevert<T> for Result<T, DscError> {
    fn or_revert(self, env: &ContractEnv) -> T {
        match self {
            Ok(value) => value,
            Err(error) => env.revert(error),
        }
    }
}
