// 📦 Product Entity - name, unit price, quantity
//
// No construction invariant: negative price or zero quantity are accepted.
// Validation is deferred to caller-supplied predicates (see PolicyHost).

use serde::{Deserialize, Serialize};

use super::policy::PolicyHost;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: f64,
    quantity: i32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, quantity: i32) -> Self {
        Product {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

impl PolicyHost for Product {}
