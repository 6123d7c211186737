// 📂 Amount Loader - price / weight lists from CSV files and inline text

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct AmountRow {
    amount: f64,
}

/// Parse a comma separated list ("10.0,20.0,30.0"). Empty or blank input is the empty list.
pub fn parse_amounts(text: &str) -> Result<Vec<f64>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .with_context(|| format!("Invalid amount: {:?}", part))
        })
        .collect()
}

/// Load amounts from a CSV file with an `amount` header column
pub fn load_amounts_csv(csv_path: &Path) -> Result<Vec<f64>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))?;

    let mut amounts = Vec::new();

    for (line, result) in rdr.deserialize().enumerate() {
        let row: AmountRow = result
            .with_context(|| format!("Failed to deserialize amount on row {}", line + 1))?;
        amounts.push(row.amount);
    }

    debug!(path = ?csv_path, count = amounts.len(), "amounts loaded");
    Ok(amounts)
}
