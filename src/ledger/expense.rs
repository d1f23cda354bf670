use serde::{Deserialize, Serialize};

use crate::currency::CurrencyFormat;

/// A categorized expense. The category is referenced by name and is owned by the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    description: String,
    amount: f64,
    category: String,
}

impl Expense {
    pub fn new(description: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// One-line description: `<description> - <currency><amount> (<category>)`.
    pub fn details(&self, format: &CurrencyFormat) -> String {
        format!(
            "{} - {} ({})",
            self.description,
            format.format(self.amount),
            self.category
        )
    }
}
