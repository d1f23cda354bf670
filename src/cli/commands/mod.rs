pub mod category;
pub mod entry;
pub mod profile;
pub mod report;
pub mod system;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

const ROOT_COMMAND_ORDER: &[&str] = &[
    "profile", "income", "expense", "category", "list", "budget", "summary", "tax", "config",
    "help", "version", "exit",
];

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(profile::definitions());
    commands.extend(entry::definitions());
    commands.extend(category::definitions());
    commands.extend(report::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn registry() -> CommandRegistry {
    CommandRegistry::ordered(all_entries(), ROOT_COMMAND_ORDER)
}

pub(crate) fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {}", usage))
}
