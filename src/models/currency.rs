use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Exchange-rate table for one base currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRates {
    pub base: String,
    pub rates: HashMap<String, f64>,
}

impl ExchangeRates {
    pub fn rate_to(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn convert(&self, amount: f64, to: &str) -> Option<f64> {
        self.rate_to(to).map(|rate| amount * rate)
    }
}
