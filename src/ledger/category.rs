use serde::{Deserialize, Serialize};

/// Categories every new profile starts with.
pub const DEFAULT_CATEGORIES: &[&str] = &["Food", "Utilities", "Entertainment", "Other"];

/// Groups expenses for reporting. Names are compared exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseCategory {
    name: String,
}

impl ExpenseCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builds the default category set in its canonical order.
    pub fn defaults() -> Vec<ExpenseCategory> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|name| ExpenseCategory::new(*name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_canonical_order() {
        let names: Vec<_> = ExpenseCategory::defaults()
            .iter()
            .map(|category| category.name().to_string())
            .collect();
        assert_eq!(names, ["Food", "Utilities", "Entertainment", "Other"]);
    }
}
