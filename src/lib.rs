#![doc(test(attr(deny(warnings))))]

//! Personal budget tracking: income and categorized expenses recorded in an
//! in-memory ledger, a progressive monthly tax estimate, and the remaining
//! budget after tax.
//!
//! ```
//! use budget_tracker::ledger::{ExpenseCategory, Income, Ledger};
//!
//! let mut ledger = Ledger::with_categories("Alice", ExpenseCategory::defaults());
//! ledger.add_income(Income::new("Salary", 50_000.0));
//! ledger.add_expense("Groceries", 5_000.0, "Food").unwrap();
//! assert!((ledger.remaining_budget() - 42_291.666_666).abs() < 1e-3);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod ledger;
pub mod tax;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("budget tracker tracing initialized");
    });
}
