// 💸 Transaction Entity - id, amount, free-form type tag
//
// `amount` is a public field on purpose: executors passed to `execute`
// mutate it directly. `set_amount` exists for callers that prefer a method.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::policy::PolicyHost;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,

    /// Open to mutation by executors
    pub amount: f64,

    /// Free-form tag, e.g. "credit" or "debit"
    #[serde(rename = "type")]
    kind: String,
}

impl Transaction {
    pub fn new(id: impl Into<String>, amount: f64, kind: impl Into<String>) -> Self {
        Transaction {
            id: id.into(),
            amount,
            kind: kind.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Run a side-effecting procedure against this transaction
    pub fn execute<F>(&mut self, executor: F)
    where
        F: FnOnce(&mut Self),
    {
        let before = self.amount;
        executor(self);
        debug!(id = %self.id, before, after = self.amount, "transaction executed");
    }
}

impl PolicyHost for Transaction {}
