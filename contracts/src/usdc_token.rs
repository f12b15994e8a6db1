//! USDC Token Interface and Mock
//!
//! The reward ledger treats USDC as an external CEP-18 fungible token and
//! only talks to it through the `UsdcToken` interface below. All amounts are
//! opaque smallest-unit integers; the ledger never inspects decimals.
//!
//! `MockUsdc` is a minimal CEP-18-style implementation used by the test
//! suite and testnet deployments where no canonical USDC exists.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::RewardError;

/// CEP-18 token interface for cross-contract calls
#[odra::external_contract]
pub trait UsdcToken {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn approve(&mut self, spender: Address, amount: U256) -> bool;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn balance_of(&self, account: Address) -> U256;
    fn total_supply(&self) -> U256;
}

pub mod events {
    use odra::prelude::*;
    use odra::casper_types::U256;

    #[odra::event]
    pub struct Transfer {
        /// None for mints
        pub from: Option<Address>,
        pub to: Address,
        pub amount: U256,
    }

    #[odra::event]
    pub struct Approval {
        pub owner: Address,
        pub spender: Address,
        pub amount: U256,
    }
}

/// Mock USDC Token Contract
///
/// Standard balance/allowance bookkeeping with an admin-gated `mint`.
/// The initial supply is minted to the deployer so test fixtures start
/// with a funded treasury account.
#[odra::module(events = [events::Transfer, events::Approval])]
pub struct MockUsdc {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Decimals (6 for USDC)
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner -> spender -> amount)
    allowances: Mapping<(Address, Address), U256>,
    /// Admin address (may mint)
    admin: Var<Address>,
}

#[odra::module]
impl MockUsdc {
    /// Initialize the token and mint the initial supply to the deployer.
    pub fn init(&mut self, name: String, symbol: String, decimals: u8, initial_supply: U256) {
        let deployer = self.env().caller();
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
        self.admin.set(deployer);

        if !initial_supply.is_zero() {
            self.mint_internal(deployer, initial_supply);
        }
    }

    // ========== CEP-18 Standard Functions ==========

    /// Get token name
    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    /// Get decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or_default()
    }

    /// Get allowance for spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    /// Transfer tokens to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.transfer_internal(sender, recipient, amount);
        true
    }

    /// Approve spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        self.env().emit_event(events::Approval {
            owner,
            spender,
            amount,
        });
        true
    }

    /// Transfer tokens from owner to recipient (requires allowance)
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();

        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            self.env().revert(RewardError::InsufficientAllowance);
        }

        self.transfer_internal(owner, recipient, amount);
        self.allowances.set(&(owner, spender), current_allowance - amount);
        true
    }

    // ========== Admin Functions ==========

    /// Mint new tokens (admin only)
    pub fn mint(&mut self, to: Address, amount: U256) {
        if self.admin.get() != Some(self.env().caller()) {
            self.env().revert(RewardError::Unauthorized);
        }
        self.mint_internal(to, amount);
    }

    /// Get admin address
    pub fn admin(&self) -> Option<Address> {
        self.admin.get()
    }

    // ========== Internal Functions ==========

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(RewardError::InsufficientUsdcBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(events::Transfer {
            from: Some(from),
            to,
            amount,
        });
    }

    fn mint_internal(&mut self, to: Address, amount: U256) {
        let balance = self.balance_of(to);
        self.balances.set(&to, balance + amount);
        self.total_supply.set(self.total_supply() + amount);

        self.env().emit_event(events::Transfer {
            from: None,
            to,
            amount,
        });
    }
}
