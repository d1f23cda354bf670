use tracing::{info, warn};

use crate::ledger::{BudgetSummary, Expense, ExpenseCategory, Income, Ledger};

use super::errors::{BudgetError, Result};
use super::utils::parse_amount;

/// Front-end state: at most one active ledger.
///
/// Every mutating call validates its input fully before touching the ledger,
/// so a rejected call never leaves partial state behind.
#[derive(Debug, Default)]
pub struct Session {
    ledger: Option<Ledger>,
}

impl Session {
    pub fn new() -> Self {
        Self { ledger: None }
    }

    pub fn ledger(&self) -> Result<&Ledger> {
        self.ledger.as_ref().ok_or(BudgetError::NoActiveProfile)
    }

    fn ledger_mut(&mut self) -> Result<&mut Ledger> {
        self.ledger.as_mut().ok_or(BudgetError::NoActiveProfile)
    }

    /// Starts a fresh profile, replacing any active one, seeded with `categories`.
    pub fn create_profile<I, S>(&mut self, name: &str, categories: I) -> Result<&Ledger>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetError::InvalidInput(
                "profile name cannot be empty".into(),
            ));
        }
        let ledger = Ledger::with_categories(name, categories.into_iter().map(ExpenseCategory::new));
        if let Some(previous) = &self.ledger {
            info!(previous = previous.name(), "replacing active profile");
        }
        info!(
            profile = name,
            categories = ledger.categories().len(),
            "profile created"
        );
        let active: &Ledger = self.ledger.insert(ledger);
        Ok(active)
    }

    pub fn add_income(&mut self, source: &str, amount_text: &str) -> Result<Income> {
        let ledger = self.ledger_mut()?;
        let amount = parse_amount(amount_text).map_err(|err| {
            warn!(source, amount = amount_text, "income rejected: invalid amount");
            err
        })?;
        let income = Income::new(source, amount);
        ledger.add_income(income.clone());
        info!(source, amount, "income recorded");
        Ok(income)
    }

    pub fn add_expense(
        &mut self,
        description: &str,
        amount_text: &str,
        category: &str,
    ) -> Result<Expense> {
        let ledger = self.ledger_mut()?;
        let amount = parse_amount(amount_text).map_err(|err| {
            warn!(
                description,
                amount = amount_text,
                "expense rejected: invalid amount"
            );
            err
        })?;
        let expense = ledger
            .add_expense(description, amount, category)
            .map_err(|err| {
                warn!(description, category, "expense rejected: unknown category");
                err
            })?
            .clone();
        info!(description, amount, category, "expense recorded");
        Ok(expense)
    }

    pub fn add_category(&mut self, name: &str) -> Result<ExpenseCategory> {
        let ledger = self.ledger_mut()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(BudgetError::InvalidInput(
                "category name cannot be empty".into(),
            ));
        }
        let category = ExpenseCategory::new(name);
        ledger.add_category(category.clone());
        info!(category = name, "category added");
        Ok(category)
    }

    pub fn total_income(&self) -> Result<f64> {
        Ok(self.ledger()?.total_income())
    }

    pub fn total_expenses(&self) -> Result<f64> {
        Ok(self.ledger()?.total_expenses())
    }

    pub fn remaining_budget(&self) -> Result<f64> {
        Ok(self.ledger()?.remaining_budget())
    }

    pub fn summary(&self) -> Result<BudgetSummary> {
        Ok(self.ledger()?.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::DEFAULT_CATEGORIES;

    fn session_with_profile() -> Session {
        let mut session = Session::new();
        session
            .create_profile("Alice", DEFAULT_CATEGORIES.iter().copied())
            .unwrap();
        session
    }

    #[test]
    fn operations_without_profile_report_no_active_profile() {
        let mut session = Session::new();
        assert!(session.ledger().is_err());
        assert_eq!(
            session.add_income("Salary", "100"),
            Err(BudgetError::NoActiveProfile)
        );
        assert_eq!(
            session.add_expense("Lunch", "10", "Food"),
            Err(BudgetError::NoActiveProfile)
        );
        assert_eq!(session.add_category("Travel"), Err(BudgetError::NoActiveProfile));
        assert_eq!(session.remaining_budget(), Err(BudgetError::NoActiveProfile));
        assert_eq!(session.total_income(), Err(BudgetError::NoActiveProfile));
    }

    #[test]
    fn no_profile_takes_precedence_over_bad_amounts() {
        let mut session = Session::new();
        assert_eq!(
            session.add_income("Salary", "abc"),
            Err(BudgetError::NoActiveProfile)
        );
    }

    #[test]
    fn create_profile_seeds_categories() {
        let session = session_with_profile();
        let ledger = session.ledger().unwrap();
        assert_eq!(ledger.name(), "Alice");
        assert_eq!(ledger.categories().len(), 4);
    }

    #[test]
    fn blank_profile_name_is_rejected() {
        let mut session = Session::new();
        let err = session
            .create_profile("   ", DEFAULT_CATEGORIES.iter().copied())
            .unwrap_err();
        assert!(matches!(err, BudgetError::InvalidInput(_)));
        assert!(session.ledger().is_err());
    }

    #[test]
    fn creating_a_new_profile_replaces_the_old_one() {
        let mut session = session_with_profile();
        session.add_income("Salary", "1000").unwrap();
        session
            .create_profile("Bob", Vec::<String>::new())
            .unwrap();
        assert_eq!(session.ledger().unwrap().name(), "Bob");
        assert_eq!(session.total_income(), Ok(0.0));
    }

    #[test]
    fn invalid_amount_leaves_totals_unchanged() {
        let mut session = session_with_profile();
        session.add_income("Salary", "2000").unwrap();
        session.add_expense("Rent", "500", "Utilities").unwrap();

        assert_eq!(
            session.add_income("Bonus", "lots"),
            Err(BudgetError::InvalidAmount("lots".into()))
        );
        assert_eq!(
            session.add_expense("Snacks", "", "Food"),
            Err(BudgetError::InvalidAmount(String::new()))
        );
        assert_eq!(session.total_income(), Ok(2000.0));
        assert_eq!(session.total_expenses(), Ok(500.0));
    }

    #[test]
    fn oversized_amounts_keep_the_budget_finite() {
        let mut session = session_with_profile();
        for _ in 0..2 {
            assert_eq!(
                session.add_income("Windfall", "1e308"),
                Err(BudgetError::InvalidAmount("1e308".into()))
            );
        }
        session.add_income("Salary", "1e12").unwrap();
        session.add_income("Salary", "1e12").unwrap();

        let remaining = session.remaining_budget().unwrap();
        assert!(remaining.is_finite());
        assert_eq!(session.total_income(), Ok(2e12));
    }

    #[test]
    fn unknown_category_leaves_totals_unchanged() {
        let mut session = session_with_profile();
        assert_eq!(
            session.add_expense("Flight", "300", "Travel"),
            Err(BudgetError::CategoryNotFound("Travel".into()))
        );
        assert_eq!(session.total_expenses(), Ok(0.0));
    }

    #[test]
    fn added_category_accepts_expenses() {
        let mut session = session_with_profile();
        session.add_category("Travel").unwrap();
        let expense = session.add_expense("Flight", "300", "Travel").unwrap();
        assert_eq!(expense.category(), "Travel");
        assert_eq!(session.total_expenses(), Ok(300.0));
    }
}
