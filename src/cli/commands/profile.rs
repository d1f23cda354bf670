use crate::cli::core::{CliMode, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

use super::usage_error;

const USAGE: &str = "profile <name>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "profile",
        "Create a user profile seeded with the default categories",
        USAGE,
        cmd_profile,
    )]
}

fn cmd_profile(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = match args {
        [] if context.mode() == CliMode::Interactive => {
            io::prompt_text(&context.theme, "User name")?
        }
        [] => return Err(usage_error(USAGE)),
        words => words.join(" "),
    };

    let categories = context.config.default_categories.clone();
    let ledger = context.session.create_profile(&name, categories)?;
    io::print_success(format!("User profile created for: {}", ledger.name()));
    let names: Vec<&str> = ledger.categories().iter().map(|c| c.name()).collect();
    io::print_info(format!("Categories: {}", names.join(", ")));
    Ok(())
}
