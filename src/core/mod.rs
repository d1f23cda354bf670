//! Session state and shared helpers sitting between the ledger and the front end.

pub mod errors;
pub mod session;
pub mod utils;

pub use errors::BudgetError;
pub use session::Session;
