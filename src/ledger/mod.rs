//! Ledger domain models: incomes, expense categories, expenses and the ledger holding them.

pub mod category;
pub mod entry;
pub mod expense;
pub mod income;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use category::{ExpenseCategory, DEFAULT_CATEGORIES};
pub use entry::Entry;
pub use expense::Expense;
pub use income::Income;
pub use ledger::{BudgetSummary, CategoryTotal, Ledger};
