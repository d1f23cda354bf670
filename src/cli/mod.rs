//! Command shell front end over the budget session.

pub mod commands;
pub mod core;
pub mod io;
pub mod output;
pub mod registry;
pub mod shell;
pub mod shell_context;

pub use shell::run_cli;
