// ⚠️ Domain Errors - the "invalid argument" family
// Raised synchronously, never retried, never leaves partial state behind

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Withdraw / transfer asked for more than the account holds
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: f64, available: f64 },

    /// Month number outside 1..=12
    #[error("Invalid month number: {0}")]
    InvalidMonth(u32),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DomainError::InsufficientBalance {
            requested: 1500.0,
            available: 1000.0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: requested 1500, available 1000"
        );
        assert_eq!(DomainError::InvalidMonth(13).to_string(), "Invalid month number: 13");
    }
}
