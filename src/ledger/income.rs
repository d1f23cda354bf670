use serde::{Deserialize, Serialize};

use crate::currency::CurrencyFormat;

/// A single income record. Amounts are stored verbatim, negatives included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    source: String,
    amount: f64,
}

impl Income {
    pub fn new(source: impl Into<String>, amount: f64) -> Self {
        Self {
            source: source.into(),
            amount,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// One-line description: `<source> - <currency><amount>`.
    pub fn details(&self, format: &CurrencyFormat) -> String {
        format!("{} - {}", self.source, format.format(self.amount))
    }
}
