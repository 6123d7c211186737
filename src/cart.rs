// 🛒 Shopping Cart Aggregates - stateless functions over price / weight lists
//
// Every function is total. Empty input is a defined zero case, not an error:
// average([]) == 0.0 and most_expensive([]) == 0.0.

use serde::{Deserialize, Serialize};

// ============================================================================
// DISCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    /// 10% off
    Seasonal,

    /// 20% off
    Clearance,

    /// No discount
    #[default]
    None,
}

impl DiscountType {
    pub const ALL: [DiscountType; 3] = [DiscountType::Seasonal, DiscountType::Clearance, DiscountType::None];

    /// Fixed discount rate as a fraction
    pub fn rate(&self) -> f64 {
        match self {
            DiscountType::Seasonal => 0.1,
            DiscountType::Clearance => 0.2,
            DiscountType::None => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Seasonal => "SEASONAL",
            DiscountType::Clearance => "CLEARANCE",
            DiscountType::None => "NONE",
        }
    }
}

pub fn discount_rate(discount_type: DiscountType) -> f64 {
    discount_type.rate()
}

// ============================================================================
// AGGREGATES
// ============================================================================

/// Arithmetic mean, 0.0 for an empty list
pub fn average_price(prices: &[f64]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }
    total_price(prices) / prices.len() as f64
}

/// Prices strictly above `threshold`, order preserved
pub fn filter_by_price(prices: &[f64], threshold: f64) -> Vec<f64> {
    prices.iter().copied().filter(|&price| price > threshold).collect()
}

pub fn count_items(prices: &[f64]) -> usize {
    prices.len()
}

/// Largest price, 0.0 for an empty list
pub fn most_expensive(prices: &[f64]) -> f64 {
    prices.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

pub fn total_weight(weights: &[f64]) -> f64 {
    weights.iter().sum()
}

pub fn total_price(prices: &[f64]) -> f64 {
    prices.iter().sum()
}

/// `sum × (1 − discount)`
pub fn total_with_discount(prices: &[f64], discount: f64) -> f64 {
    total_price(prices) * (1.0 - discount)
}

/// `sum × (1 + tax)`
pub fn total_with_tax(prices: &[f64], tax: f64) -> f64 {
    total_price(prices) * (1.0 + tax)
}

/// `sum × (1 − discount) × (1 + tax)`
pub fn total_with_discount_and_tax(prices: &[f64], discount: f64, tax: f64) -> f64 {
    total_price(prices) * (1.0 - discount) * (1.0 + tax)
}

// ============================================================================
// TESTS
// ============================================================================
