//! Reward ledger error definitions.

use odra::prelude::*;

/// Reward ledger errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RewardError {
    // Validation errors (1xx)
    InvalidAddress = 100,
    InvalidAmount = 101,

    // Access control errors (2xx)
    Unauthorized = 200,

    // Balance errors (3xx)
    InsufficientPoints = 300,
    InsufficientUsdcBalance = 301,
    InsufficientAllowance = 302,

    // Configuration errors (4xx)
    ExchangeRateNotSet = 400,

    // Arithmetic errors (5xx)
    ArithmeticOverflow = 500,

    // Lifecycle errors (6xx)
    ContractPaused = 600,
    ContractNotPaused = 601,

    // External token errors (7xx)
    TokenTransferFailed = 700,
}

impl RewardError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Validation
            RewardError::InvalidAddress => "Zero address supplied where a real account is required",
            RewardError::InvalidAmount => "Amount must be greater than zero",

            // Access control
            RewardError::Unauthorized => "Unauthorized: caller is not the owner",

            // Balances
            RewardError::InsufficientPoints => "Insufficient point balance",
            RewardError::InsufficientUsdcBalance => "Insufficient USDC balance",
            RewardError::InsufficientAllowance => "Insufficient USDC allowance",

            // Configuration
            RewardError::ExchangeRateNotSet => "Exchange rate not set",

            // Arithmetic
            RewardError::ArithmeticOverflow => "Arithmetic overflow in USDC amount calculation",

            // Lifecycle
            RewardError::ContractPaused => "Contract is paused",
            RewardError::ContractNotPaused => "Contract is not paused",

            // External token
            RewardError::TokenTransferFailed => "Token transfer failed",
        }
    }
}

impl core::fmt::Display for RewardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<RewardError> for OdraError {
    fn from(error: RewardError) -> Self {
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
