use std::fmt;

use crate::currency::CurrencyFormat;

use super::{Expense, Income};

/// Borrowed view over anything the ledger records, for uniform display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry<'a> {
    Income(&'a Income),
    Expense(&'a Expense),
}

impl Entry<'_> {
    pub fn details(&self, format: &CurrencyFormat) -> String {
        match self {
            Entry::Income(income) => income.details(format),
            Entry::Expense(expense) => expense.details(format),
        }
    }

    pub fn label(&self) -> EntryLabel {
        match self {
            Entry::Income(_) => EntryLabel::Income,
            Entry::Expense(_) => EntryLabel::Expense,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLabel {
    Income,
    Expense,
}

impl fmt::Display for EntryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryLabel::Income => f.pad("income"),
            EntryLabel::Expense => f.pad("expense"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_format_per_variant() {
        let format = CurrencyFormat::new("$", 0);
        let income = Income::new("Salary", 50_000.0);
        let expense = Expense::new("Rent", 1200.0, "Utilities");

        assert_eq!(Entry::Income(&income).details(&format), "Salary - $50000");
        assert_eq!(
            Entry::Expense(&expense).details(&format),
            "Rent - $1200 (Utilities)"
        );
        assert_eq!(Entry::Expense(&expense).label().to_string(), "expense");
    }
}
