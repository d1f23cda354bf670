use serde::{Deserialize, Serialize};

pub const DEFAULT_SYMBOL: &str = "₹";
pub const DEFAULT_PRECISION: usize = 2;

/// How amounts are rendered for display. No rounding happens in the core;
/// precision only affects the rendered text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub precision: usize,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL, DEFAULT_PRECISION)
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, precision: usize) -> Self {
        Self {
            symbol: symbol.into(),
            precision,
        }
    }

    /// Renders `amount` as `<symbol><amount>`, with the sign ahead of the symbol.
    pub fn format(&self, amount: f64) -> String {
        let magnitude = format!("{:.prec$}", amount.abs(), prec = self.precision);
        if amount < 0.0 && magnitude.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
            format!("-{}{}", self.symbol, magnitude)
        } else {
            format!("{}{}", self.symbol, magnitude)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_symbol_and_precision() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format(42291.666_666), "₹42291.67");
        assert_eq!(CurrencyFormat::new("$", 0).format(9375.0), "$9375");
    }

    #[test]
    fn negative_amounts_put_sign_first() {
        assert_eq!(CurrencyFormat::new("€", 2).format(-12.5), "-€12.50");
    }

    #[test]
    fn negative_values_that_round_to_zero_drop_the_sign() {
        assert_eq!(CurrencyFormat::new("$", 2).format(-0.001), "$0.00");
    }
}
