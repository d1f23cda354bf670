use std::result::Result as StdResult;

use thiserror::Error;

/// Recoverable failures raised by the ledger, session and configuration layers.
///
/// None of these are fatal: a rejected operation leaves the active ledger
/// exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BudgetError {
    #[error("Invalid amount: `{0}`")]
    InvalidAmount(String),
    #[error("No active profile. Create one with `profile <name>` first.")]
    NoActiveProfile,
    #[error("Expense category not found: {0}")]
    CategoryNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = BudgetError::InvalidAmount("abc".into());
        assert_eq!(err.to_string(), "Invalid amount: `abc`");

        let err = BudgetError::CategoryNotFound("Travel".into());
        assert_eq!(err.to_string(), "Expense category not found: Travel");
    }

    #[test]
    fn io_errors_become_config_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(BudgetError::from(io), BudgetError::ConfigError(_)));
    }
}
