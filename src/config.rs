// ⚙️ Cart Configuration - discount policy, tax, threshold as data
// Loaded from JSON; every field falls back to a neutral default.

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::cart::{self, DiscountType};

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Discount policy applied to the cart total
    pub discount: DiscountType,

    /// Tax rate as a fraction (0.1 = 10%)
    pub tax_rate: f64,

    /// Items strictly above this price are reported separately
    pub price_threshold: f64,
}

impl CartConfig {
    /// Load config from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: CartConfig = content.parse()?;
        info!(
            discount = config.discount.as_str(),
            tax_rate = config.tax_rate,
            price_threshold = config.price_threshold,
            "cart config loaded"
        );
        Ok(config)
    }

    /// Apply this config to a list of prices
    pub fn summarize(&self, prices: &[f64]) -> CartSummary {
        let discount_rate = self.discount.rate();

        CartSummary {
            count: cart::count_items(prices),
            total: cart::total_price(prices),
            average: cart::average_price(prices),
            most_expensive: cart::most_expensive(prices),
            above_threshold: cart::filter_by_price(prices, self.price_threshold),
            discount: self.discount,
            discount_rate,
            discounted_total: cart::total_with_discount(prices, discount_rate),
            final_total: cart::total_with_discount_and_tax(prices, discount_rate, self.tax_rate),
        }
    }
}

impl FromStr for CartConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("Failed to parse cart config JSON")
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    pub most_expensive: f64,
    pub above_threshold: Vec<f64>,
    pub discount: DiscountType,
    pub discount_rate: f64,
    pub discounted_total: f64,

    /// After discount and tax
    pub final_total: f64,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn assert_close(expected: f64, actual: f64) {
        assert!((expected - actual).abs() < 1e-9, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn test_defaults() {
        let config: CartConfig = "{}".parse().unwrap();
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.discount, DiscountType::None);
        assert_eq!(config.tax_rate, 0.0);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: CartConfig = r#"{"discount": "SEASONAL", "tax_rate": 0.1}"#.parse().unwrap();
        assert_eq!(config.discount, DiscountType::Seasonal);
        assert_close(0.1, config.tax_rate);
        assert_eq!(config.price_threshold, 0.0);
    }

    #[test]
    fn test_parse_unknown_discount_fails() {
        let result: Result<CartConfig> = r#"{"discount": "BLACK_FRIDAY"}"#.parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"discount": "CLEARANCE", "tax_rate": 0.05, "price_threshold": 15.0}}"#).unwrap();
        file.flush().unwrap();

        let config = CartConfig::from_file(file.path()).unwrap();
        assert_eq!(config.discount, DiscountType::Clearance);
        assert_close(0.05, config.tax_rate);
        assert_close(15.0, config.price_threshold);
    }

    #[test]
    fn test_from_missing_file() {
        assert!(CartConfig::from_file("/nonexistent/cart.json").is_err());
    }

    #[test]
    fn test_summarize() {
        let config = CartConfig {
            discount: DiscountType::Seasonal,
            tax_rate: 0.1,
            price_threshold: 15.0,
        };
        let summary = config.summarize(&[10.0, 20.0, 30.0]);

        assert_eq!(summary.count, 3);
        assert_close(60.0, summary.total);
        assert_close(20.0, summary.average);
        assert_close(30.0, summary.most_expensive);
        assert_eq!(summary.above_threshold, vec![20.0, 30.0]);
        assert_close(0.1, summary.discount_rate);
        assert_close(54.0, summary.discounted_total);
        assert_close(59.4, summary.final_total);
    }

    #[test]
    fn test_summarize_empty_cart() {
        let summary = CartConfig::default().summarize(&[]);

        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.most_expensive, 0.0);
        assert!(summary.above_threshold.is_empty());
        assert_eq!(summary.final_total, 0.0);
    }
}
