// 🧾 Customer Entity - a name plus the products ordered, in order

use serde::{Deserialize, Serialize};

use super::policy::PolicyHost;
use super::product::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    orders: Vec<Product>,
}

impl Customer {
    pub fn new(name: impl Into<String>, orders: Vec<Product>) -> Self {
        Customer {
            name: name.into(),
            orders,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orders(&self) -> &[Product] {
        &self.orders
    }
}

impl PolicyHost for Customer {}
