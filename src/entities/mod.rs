// Entity Models
// Plain in-memory records: constructed once, read through accessors, mutated
// through named methods (Account, Employee) or caller-supplied closures
// (Customer, Product, Transaction via PolicyHost).

pub mod account;
pub mod customer;
pub mod employee;
pub mod policy;
pub mod product;
pub mod transaction;

pub use account::Account;
pub use customer::Customer;
pub use employee::Employee;
pub use policy::PolicyHost;
pub use product::Product;
pub use transaction::Transaction;
