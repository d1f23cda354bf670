use serde::Serialize;
use tracing::debug;

use crate::core::errors::{BudgetError, Result};
use crate::tax::TaxCalculator;

use super::{Entry, Expense, ExpenseCategory, Income};

/// A single user's budget: a name plus append-only incomes, expenses and categories.
///
/// Collections keep insertion order and are only ever appended to, so every
/// query below is recomputed from the live lists on each call.
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    name: String,
    incomes: Vec<Income>,
    expenses: Vec<Expense>,
    categories: Vec<ExpenseCategory>,
}

/// Expenses summed for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    pub count: usize,
}

/// Point-in-time snapshot of the ledger's aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub name: String,
    pub total_income: f64,
    pub total_expenses: f64,
    pub monthly_tax: f64,
    pub remaining_budget: f64,
    pub per_category: Vec<CategoryTotal>,
}

impl Ledger {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            incomes: Vec::new(),
            expenses: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Creates a ledger seeded with the given categories.
    pub fn with_categories(
        name: impl Into<String>,
        categories: impl IntoIterator<Item = ExpenseCategory>,
    ) -> Self {
        let mut ledger = Self::new(name);
        for category in categories {
            ledger.add_category(category);
        }
        ledger
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_income(&mut self, income: Income) {
        debug!(source = income.source(), amount = income.amount(), "income appended");
        self.incomes.push(income);
    }

    pub fn add_category(&mut self, category: ExpenseCategory) {
        debug!(category = category.name(), "category appended");
        self.categories.push(category);
    }

    /// Records an expense against one of this ledger's categories.
    ///
    /// Returns [`BudgetError::CategoryNotFound`] without touching the ledger
    /// when `category` is not a known category name.
    pub fn add_expense(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: &str,
    ) -> Result<&Expense> {
        if self.category(category).is_none() {
            return Err(BudgetError::CategoryNotFound(category.to_string()));
        }
        let expense = Expense::new(description, amount, category);
        debug!(
            description = expense.description(),
            amount,
            category,
            "expense appended"
        );
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    pub fn incomes(&self) -> &[Income] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn categories(&self) -> &[ExpenseCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&ExpenseCategory> {
        self.categories.iter().find(|category| category.name() == name)
    }

    /// Incomes followed by expenses, each in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> + '_ {
        self.incomes
            .iter()
            .map(Entry::Income)
            .chain(self.expenses.iter().map(Entry::Expense))
    }

    pub fn total_income(&self) -> f64 {
        self.incomes.iter().map(Income::amount).sum()
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Income minus expenses minus the monthly tax on the current total income.
    pub fn remaining_budget(&self) -> f64 {
        let income = self.total_income();
        income - self.total_expenses() - TaxCalculator::calculate_monthly_tax(income)
    }

    /// Per-category expense totals, in category order. Duplicate category names share one row.
    pub fn expenses_by_category(&self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for category in &self.categories {
            if totals.iter().any(|row| row.category == category.name()) {
                continue;
            }
            let matching = self
                .expenses
                .iter()
                .filter(|expense| expense.category() == category.name());
            let (total, count) = matching.fold((0.0, 0), |(sum, n), expense| {
                (sum + expense.amount(), n + 1)
            });
            totals.push(CategoryTotal {
                category: category.name().to_string(),
                total,
                count,
            });
        }
        totals
    }

    pub fn summary(&self) -> BudgetSummary {
        let total_income = self.total_income();
        let total_expenses = self.total_expenses();
        let monthly_tax = TaxCalculator::calculate_monthly_tax(total_income);
        BudgetSummary {
            name: self.name.clone(),
            total_income,
            total_expenses,
            monthly_tax,
            remaining_budget: total_income - total_expenses - monthly_tax,
            per_category: self.expenses_by_category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Ledger {
        Ledger::with_categories("Alice", ExpenseCategory::defaults())
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = Ledger::new("Bob");
        assert_eq!(ledger.name(), "Bob");
        assert_eq!(ledger.total_income(), 0.0);
        assert_eq!(ledger.total_expenses(), 0.0);
        assert_eq!(ledger.remaining_budget(), 0.0);
        assert!(ledger.categories().is_empty());
    }

    #[test]
    fn unknown_category_is_rejected_without_mutation() {
        let mut ledger = seeded();
        let err = ledger.add_expense("Flight", 300.0, "Travel").unwrap_err();
        assert_eq!(err, BudgetError::CategoryNotFound("Travel".into()));
        assert!(ledger.expenses().is_empty());
        assert_eq!(ledger.total_expenses(), 0.0);
    }

    #[test]
    fn category_lookup_is_case_sensitive() {
        let mut ledger = seeded();
        assert!(ledger.add_expense("Lunch", 12.0, "food").is_err());
        assert!(ledger.add_expense("Lunch", 12.0, "Food").is_ok());
    }

    #[test]
    fn negative_income_is_stored_verbatim() {
        let mut ledger = seeded();
        ledger.add_income(Income::new("Refund reversal", -250.0));
        assert_eq!(ledger.incomes().len(), 1);
        assert_eq!(ledger.total_income(), -250.0);
    }

    #[test]
    fn entries_list_incomes_before_expenses() {
        let mut ledger = seeded();
        ledger.add_expense("Cinema", 15.0, "Entertainment").unwrap();
        ledger.add_income(Income::new("Salary", 1000.0));

        let kinds: Vec<_> = ledger.entries().map(|entry| entry.label()).collect();
        assert_eq!(
            kinds,
            [
                crate::ledger::entry::EntryLabel::Income,
                crate::ledger::entry::EntryLabel::Expense
            ]
        );
    }

    #[test]
    fn per_category_totals_follow_category_order() {
        let mut ledger = seeded();
        ledger.add_expense("Power", 80.0, "Utilities").unwrap();
        ledger.add_expense("Groceries", 50.0, "Food").unwrap();
        ledger.add_expense("Bakery", 5.0, "Food").unwrap();

        let totals = ledger.expenses_by_category();
        assert_eq!(totals.len(), 4);
        assert_eq!(totals[0].category, "Food");
        assert_eq!(totals[0].total, 55.0);
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[1].total, 80.0);
        assert_eq!(totals[3].count, 0);
    }

    #[test]
    fn summary_agrees_with_individual_queries() {
        let mut ledger = seeded();
        ledger.add_income(Income::new("Salary", 50_000.0));
        ledger.add_expense("Groceries", 5000.0, "Food").unwrap();

        let summary = ledger.summary();
        assert_eq!(summary.total_income, ledger.total_income());
        assert_eq!(summary.total_expenses, ledger.total_expenses());
        assert!((summary.remaining_budget - ledger.remaining_budget()).abs() < 1e-9);
    }
}
