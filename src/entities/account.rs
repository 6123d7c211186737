// 💳 Account Entity - account number + balance
//
// "The account number is IDENTITY (never changes), the balance is a VALUE"
//
// Invariant:
// - withdraw / transfer_funds never take the balance below what it holds;
//   a rejected request leaves both accounts untouched
// - deposit and apply_interest are unguarded (negative amounts/rates pass)

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DomainError, DomainResult};

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Bank account holding a single balance.
///
/// Not synchronized. Sharing an account across threads needs an outer lock,
/// and `transfer_funds` touches two accounts in two separate steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Stable identity - set once at construction
    account_number: String,

    /// Current balance
    balance: f64,
}

impl Account {
    /// Create an account with an opening balance
    pub fn new(account_number: impl Into<String>, balance: f64) -> Self {
        Account {
            account_number: account_number.into(),
            balance,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add `amount` to the balance (no sign check)
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
        debug!(account = %self.account_number, amount, balance = self.balance, "deposit");
    }

    /// Remove `amount` from the balance
    ///
    /// Fails with `InsufficientBalance` when `amount > balance`.
    pub fn withdraw(&mut self, amount: f64) -> DomainResult<()> {
        self.ensure_funds(amount)?;
        self.balance -= amount;
        debug!(account = %self.account_number, amount, balance = self.balance, "withdraw");
        Ok(())
    }

    /// Move `amount` from this account into `target`
    ///
    /// Same failure condition as `withdraw`; on failure neither account changes.
    pub fn transfer_funds(&mut self, target: &mut Account, amount: f64) -> DomainResult<()> {
        self.ensure_funds(amount)?;
        self.withdraw(amount)?;
        target.deposit(amount);
        debug!(
            from = %self.account_number,
            to = %target.account_number,
            amount,
            "transfer"
        );
        Ok(())
    }

    /// `balance += balance * rate / 100` (rate in percent, may be negative)
    pub fn apply_interest(&mut self, rate_percent: f64) {
        self.balance += self.balance * rate_percent / 100.0;
        debug!(account = %self.account_number, rate_percent, balance = self.balance, "interest applied");
    }

    fn ensure_funds(&self, amount: f64) -> DomainResult<()> {
        if amount <= self.balance {
            return Ok(());
        }
        warn!(
            account = %self.account_number,
            requested = amount,
            available = self.balance,
            "insufficient balance"
        );
        Err(DomainError::InsufficientBalance {
            requested: amount,
            available: self.balance,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
