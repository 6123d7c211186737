// Tally - Core Library
// Domain model records + arithmetic / string / date utilities.
// Exposes all modules for use in the CLI and tests.

pub mod error;
pub mod entities;
pub mod cart;
pub mod date_utils;
pub mod string_utils;
pub mod loader;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use entities::{
    Account, Customer, Employee, PolicyHost, Product, Transaction,
};
pub use cart::DiscountType;
pub use config::{CartConfig, CartSummary};
pub use loader::{load_amounts_csv, parse_amounts};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
