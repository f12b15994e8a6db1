//! USDC Reward Ledger Contract
//!
//! Holds per-user reward point balances earned off-chain and lets users
//! redeem them for USDC out of a custodial pool.
//!
//! Key mechanics:
//! - Owner credits/debits points (amounts are decided by an external service)
//! - Owner sets a global exchange rate: USDC smallest units per point
//! - Owner funds/drains the USDC pool (approve -> transfer_from pattern)
//! - Any user claims against their own balance; points are burned and the
//!   USDC equivalent is paid out of the pool
//!
//! Pause semantics:
//! - While paused only `claim_usdc` is blocked; all owner operations and all
//!   views stay available.
//!
//! The pool is the contract's own USDC balance; there is no shadow counter.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::RewardError;
use crate::usdc_token::UsdcTokenContractRef;

pub mod events {
    use odra::prelude::*;
    use odra::casper_types::U256;

    #[odra::event]
    pub struct PointsAdded {
        pub user: Address,
        pub amount: U256,
        pub new_balance: U256,
    }

    #[odra::event]
    pub struct PointsRemoved {
        pub user: Address,
        pub amount: U256,
        pub new_balance: U256,
    }

    #[odra::event]
    pub struct ExchangeRateSet {
        pub rate: U256,
    }

    #[odra::event]
    pub struct UsdcDeposited {
        pub from: Address,
        pub amount: U256,
        pub pool_balance: U256,
    }

    #[odra::event]
    pub struct UsdcWithdrawn {
        pub to: Address,
        pub amount: U256,
        pub pool_balance: U256,
    }

    #[odra::event]
    pub struct UsdcClaimed {
        pub user: Address,
        pub points: U256,
        pub usdc_amount: U256,
    }

    #[odra::event]
    pub struct ContractPaused {
        pub by: Address,
    }

    #[odra::event]
    pub struct ContractUnpaused {
        pub by: Address,
    }

    #[odra::event]
    pub struct OwnershipTransferred {
        pub previous_owner: Address,
        pub new_owner: Address,
    }
}

/// The all-zero account/contract hash stands in for the null address.
pub(crate) fn is_zero_address(address: &Address) -> bool {
    match address {
        Address::Account(hash) => hash.value() == [0u8; 32],
        Address::Contract(hash) => hash.value() == [0u8; 32],
    }
}

/// USDC Reward Ledger Contract
#[odra::module(events = [
    events::PointsAdded,
    events::PointsRemoved,
    events::ExchangeRateSet,
    events::UsdcDeposited,
    events::UsdcWithdrawn,
    events::UsdcClaimed,
    events::ContractPaused,
    events::ContractUnpaused,
    events::OwnershipTransferred
])]
pub struct UsdcRewards {
    /// External USDC token (CEP-18), set once at init
    usdc_token: Var<Address>,
    /// Contract owner (administrator)
    owner: Var<Address>,
    /// Pause flag, gates claims only
    paused: Var<bool>,
    /// USDC smallest units per point; zero disables redemption
    exchange_rate: Var<U256>,
    /// Redeemable points per user
    point_balances: Mapping<Address, U256>,
    /// Lifetime points redeemed per user
    total_claimed: Mapping<Address, U256>,
}

#[odra::module]
impl UsdcRewards {
    /// Initialize the ledger with the USDC token address.
    /// The deployer becomes the owner; redemption starts disabled (rate 0).
    pub fn init(&mut self, usdc_token: Address) {
        if is_zero_address(&usdc_token) {
            self.env().revert(RewardError::InvalidAddress);
        }
        self.usdc_token.set(usdc_token);
        self.owner.set(self.env().caller());
        self.paused.set(false);
        self.exchange_rate.set(U256::zero());
    }

    // ========== Point Management (Owner Only) ==========

    /// Credit points to a user.
    pub fn add_points(&mut self, user: Address, amount: U256) {
        self.require_owner();
        self.require_real_account(&user);
        self.require_positive(amount);

        let new_balance = self.point_balances.get(&user).unwrap_or_default() + amount;
        self.point_balances.set(&user, new_balance);

        self.env().emit_event(events::PointsAdded {
            user,
            amount,
            new_balance,
        });
    }

    /// Debit points from a user.
    pub fn subtract_points(&mut self, user: Address, amount: U256) {
        self.require_owner();
        self.require_real_account(&user);
        self.require_positive(amount);

        let balance = self.point_balances.get(&user).unwrap_or_default();
        if balance < amount {
            self.env().revert(RewardError::InsufficientPoints);
        }

        let new_balance = balance - amount;
        self.point_balances.set(&user, new_balance);

        self.env().emit_event(events::PointsRemoved {
            user,
            amount,
            new_balance,
        });
    }

    // ========== Exchange Rate Management (Owner Only) ==========

    /// Set the global exchange rate (USDC smallest units per point).
    /// Takes effect immediately for all future claims; zero disables claims.
    pub fn set_exchange_rate(&mut self, rate: U256) {
        self.require_owner();
        self.exchange_rate.set(rate);
        self.env().emit_event(events::ExchangeRateSet { rate });
    }

    // ========== Claim ==========

    /// Redeem the caller's points for USDC at the current exchange rate.
    /// Points are debited and the lifetime-claimed counter credited before
    /// the external token transfer.
    #[odra(non_reentrant)]
    pub fn claim_usdc(&mut self, points: U256) {
        self.require_not_paused();
        let caller = self.env().caller();

        if points.is_zero() {
            self.env().revert(RewardError::InvalidAmount);
        }

        let rate = self.exchange_rate.get_or_default();
        if rate.is_zero() {
            self.env().revert(RewardError::ExchangeRateNotSet);
        }

        let usdc_amount = points
            .checked_mul(rate)
            .unwrap_or_else(|| self.env().revert(RewardError::ArithmeticOverflow));
        if usdc_amount.is_zero() {
            self.env().revert(RewardError::InvalidAmount);
        }

        let balance = self.point_balances.get(&caller).unwrap_or_default();
        if balance < points {
            self.env().revert(RewardError::InsufficientPoints);
        }

        let mut usdc = self.usdc();
        let self_address = self.env().self_address();
        if usdc.balance_of(self_address) < usdc_amount {
            self.env().revert(RewardError::InsufficientUsdcBalance);
        }

        // Effects strictly before the external call
        self.point_balances.set(&caller, balance - points);
        let claimed = self.total_claimed.get(&caller).unwrap_or_default();
        self.total_claimed.set(&caller, claimed + points);

        if !usdc.transfer(caller, usdc_amount) {
            self.env().revert(RewardError::TokenTransferFailed);
        }

        self.env().emit_event(events::UsdcClaimed {
            user: caller,
            points,
            usdc_amount,
        });
    }

    // ========== Pool Management (Owner Only) ==========

    /// Pull USDC from the owner into the pool.
    /// Requires a prior `approve` on the token for at least `amount`.
    #[odra(non_reentrant)]
    pub fn deposit_usdc(&mut self, amount: U256) {
        self.require_owner();
        self.require_positive(amount);

        let caller = self.env().caller();
        let self_address = self.env().self_address();
        let mut usdc = self.usdc();

        if usdc.allowance(caller, self_address) < amount {
            self.env().revert(RewardError::InsufficientAllowance);
        }
        if !usdc.transfer_from(caller, self_address, amount) {
            self.env().revert(RewardError::TokenTransferFailed);
        }

        let pool_balance = usdc.balance_of(self_address);
        self.env().emit_event(events::UsdcDeposited {
            from: caller,
            amount,
            pool_balance,
        });
    }

    /// Move USDC from the pool back to the owner.
    #[odra(non_reentrant)]
    pub fn withdraw_usdc(&mut self, amount: U256) {
        self.require_owner();
        self.require_positive(amount);

        let caller = self.env().caller();
        let self_address = self.env().self_address();
        let mut usdc = self.usdc();

        if usdc.balance_of(self_address) < amount {
            self.env().revert(RewardError::InsufficientUsdcBalance);
        }
        if !usdc.transfer(caller, amount) {
            self.env().revert(RewardError::TokenTransferFailed);
        }

        let pool_balance = usdc.balance_of(self_address);
        self.env().emit_event(events::UsdcWithdrawn {
            to: caller,
            amount,
            pool_balance,
        });
    }

    // ========== Pause / Ownership (Owner Only) ==========

    /// Pause claims (owner only). Reverts if already paused.
    pub fn pause(&mut self) {
        self.require_owner();
        if self.paused.get_or_default() {
            self.env().revert(RewardError::ContractPaused);
        }
        self.paused.set(true);
        self.env().emit_event(events::ContractPaused {
            by: self.env().caller(),
        });
    }

    /// Resume claims (owner only). Reverts if not paused.
    pub fn unpause(&mut self) {
        self.require_owner();
        if !self.paused.get_or_default() {
            self.env().revert(RewardError::ContractNotPaused);
        }
        self.paused.set(false);
        self.env().emit_event(events::ContractUnpaused {
            by: self.env().caller(),
        });
    }

    /// Transfer ownership in a single step. The old owner loses all
    /// administrative rights the moment this commits.
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.require_owner();
        self.require_real_account(&new_owner);

        let previous_owner = self.env().caller();
        self.owner.set(new_owner);

        self.env().emit_event(events::OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }

    // ========== View Functions ==========

    /// Get a user's redeemable point balance (zero for unknown users).
    pub fn get_point_balance(&self, user: Address) -> U256 {
        self.point_balances.get(&user).unwrap_or_default()
    }

    /// Get a user's lifetime redeemed points (zero for unknown users).
    pub fn get_total_claimed_points(&self, user: Address) -> U256 {
        self.total_claimed.get(&user).unwrap_or_default()
    }

    /// Convert points to USDC at the current rate.
    /// Returns zero when the rate is unset or `points` is zero; reverts on
    /// overflow rather than wrapping.
    pub fn calculate_usdc_amount(&self, points: U256) -> U256 {
        let rate = self.exchange_rate.get_or_default();
        if rate.is_zero() || points.is_zero() {
            return U256::zero();
        }
        points
            .checked_mul(rate)
            .unwrap_or_else(|| self.env().revert(RewardError::ArithmeticOverflow))
    }

    /// Get the current exchange rate (USDC smallest units per point).
    pub fn get_exchange_rate(&self) -> U256 {
        self.exchange_rate.get_or_default()
    }

    /// Get the pool's USDC balance.
    pub fn get_usdc_balance(&self) -> U256 {
        self.usdc().balance_of(self.env().self_address())
    }

    /// Get the USDC token address.
    pub fn usdc_token(&self) -> Option<Address> {
        self.usdc_token.get()
    }

    /// Get the contract owner.
    pub fn owner(&self) -> Option<Address> {
        self.owner.get()
    }

    /// Check if claims are paused.
    pub fn is_paused(&self) -> bool {
        self.paused.get_or_default()
    }

    // ========== Internal Functions ==========

    fn usdc(&self) -> UsdcTokenContractRef {
        let token = self
            .usdc_token
            .get()
            .unwrap_or_else(|| self.env().revert(RewardError::InvalidAddress));
        UsdcTokenContractRef::new(self.env().clone(), token)
    }

    fn require_owner(&self) {
        if self.owner.get() != Some(self.env().caller()) {
            self.env().revert(RewardError::Unauthorized);
        }
    }

    fn require_not_paused(&self) {
        if self.paused.get_or_default() {
            self.env().revert(RewardError::ContractPaused);
        }
    }

    fn require_real_account(&self, address: &Address) {
        if is_zero_address(address) {
            self.env().revert(RewardError::InvalidAddress);
        }
    }

    fn require_positive(&self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(RewardError::InvalidAmount);
        }
    }
}
