use dirs::config_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use super::errors::{BudgetError, Result};

const APP_DIR_NAME: &str = "budget_tracker";
const CONFIG_FILE: &str = "config.json";
pub const HOME_ENV: &str = "BUDGET_TRACKER_HOME";

/// Largest magnitude accepted for a single entered amount. Keeps annualised
/// totals and tax well inside the finite `f64` range.
pub const MAX_AMOUNT: f64 = 1e12;

/// Application directory, `$BUDGET_TRACKER_HOME` or `<config dir>/budget_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Parses user-entered amount text. Surrounding whitespace is ignored; anything
/// that is not a decimal number within [`MAX_AMOUNT`] is an
/// [`BudgetError::InvalidAmount`].
pub fn parse_amount(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() <= MAX_AMOUNT => Ok(value),
        _ => Err(BudgetError::InvalidAmount(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_amount("50000"), Ok(50_000.0));
        assert_eq!(parse_amount("  12.75 "), Ok(12.75));
        assert_eq!(parse_amount("-3"), Ok(-3.0));
        assert_eq!(parse_amount("1e3"), Ok(1000.0));
    }

    #[test]
    fn rejects_non_numeric_text() {
        for text in ["", "   ", "abc", "12,50", "5k", "NaN", "inf", "-infinity"] {
            assert!(
                matches!(parse_amount(text), Err(BudgetError::InvalidAmount(_))),
                "`{text}` should be rejected"
            );
        }
    }

    #[test]
    fn rejects_amounts_beyond_the_limit() {
        assert_eq!(parse_amount("1e12"), Ok(MAX_AMOUNT));
        assert_eq!(parse_amount("-1e12"), Ok(-MAX_AMOUNT));
        for text in ["1e308", "1000000000000.01", "-2e12"] {
            assert_eq!(
                parse_amount(text),
                Err(BudgetError::InvalidAmount(text.to_string()))
            );
        }
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
