//! USDC Rewards Contracts
//!
//! On-chain points-to-USDC redemption for the recording rewards app.
//!
//! ## Architecture
//!
//! - **UsdcRewards**: per-user point ledger, exchange-rate config and
//!   custodial USDC pool with self-service claims
//! - **MockUsdc**: CEP-18-style USDC stand-in for tests and testnet
//!   deployments
//!
//! Point amounts are decided off-chain by the contribution backend; this
//! crate only stores, debits, credits and redeems them.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

pub mod errors;
pub mod reward_ledger;
pub mod usdc_token;
