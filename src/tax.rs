//! Progressive income tax estimate.
//!
//! Tax is assessed on annualised income using a fixed four-bracket marginal
//! schedule and reported back as a monthly figure. Bracket upper bounds are
//! inclusive: an annual income exactly on a bound belongs to the lower bracket.

/// One slice of the annual schedule. `upper` is `None` for the open top bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    pub upper: Option<f64>,
    pub rate: f64,
}

/// Annual schedule, ordered from the lowest bracket up.
pub const TAX_SCHEDULE: &[TaxBracket] = &[
    TaxBracket {
        upper: Some(250_000.0),
        rate: 0.0,
    },
    TaxBracket {
        upper: Some(500_000.0),
        rate: 0.05,
    },
    TaxBracket {
        upper: Some(1_000_000.0),
        rate: 0.20,
    },
    TaxBracket {
        upper: None,
        rate: 0.30,
    },
];

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Result of a tax computation, kept for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBreakdown {
    pub monthly_income: f64,
    pub annual_income: f64,
    pub annual_tax: f64,
    pub monthly_tax: f64,
    /// Index into [`TAX_SCHEDULE`] of the bracket the annual income falls in.
    pub bracket: usize,
}

pub struct TaxCalculator;

impl TaxCalculator {
    /// Monthly tax owed on `monthly_income`. Never fails; non-positive income owes nothing.
    pub fn calculate_monthly_tax(monthly_income: f64) -> f64 {
        Self::annual_tax(monthly_income * MONTHS_PER_YEAR) / MONTHS_PER_YEAR
    }

    /// Tax owed on a full year of income.
    pub fn annual_tax(annual_income: f64) -> f64 {
        let mut tax = 0.0;
        let mut lower = 0.0;
        for bracket in TAX_SCHEDULE {
            if annual_income <= lower {
                break;
            }
            let top = match bracket.upper {
                Some(upper) if annual_income > upper => upper,
                _ => annual_income,
            };
            tax += (top - lower) * bracket.rate;
            match bracket.upper {
                Some(upper) => lower = upper,
                None => break,
            }
        }
        tax
    }

    /// Index of the bracket `annual_income` falls in.
    pub fn bracket_index(annual_income: f64) -> usize {
        TAX_SCHEDULE
            .iter()
            .position(|bracket| bracket.upper.map_or(true, |upper| annual_income <= upper))
            .unwrap_or(TAX_SCHEDULE.len() - 1)
    }

    pub fn breakdown(monthly_income: f64) -> TaxBreakdown {
        let annual_income = monthly_income * MONTHS_PER_YEAR;
        let annual_tax = Self::annual_tax(annual_income);
        TaxBreakdown {
            monthly_income,
            annual_income,
            annual_tax,
            monthly_tax: annual_tax / MONTHS_PER_YEAR,
            bracket: Self::bracket_index(annual_income),
        }
    }
}
