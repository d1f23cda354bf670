use crate::cli::core::{CliMode, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

use super::usage_error;

const USAGE: &str = "category <add <name>|list>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "category",
        "Add or list expense categories",
        USAGE,
        cmd_category,
    )]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        return handle_list(context);
    };
    match action.to_lowercase().as_str() {
        "add" => handle_add(context, rest),
        "list" => handle_list(context),
        _ => Err(usage_error(USAGE)),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = match args {
        [] if context.mode() == CliMode::Interactive => {
            context.session.ledger()?;
            io::prompt_text(&context.theme, "Category name")?
        }
        [] => return Err(usage_error(USAGE)),
        words => words.join(" "),
    };
    let category = context.session.add_category(&name)?;
    io::print_success(format!("Added category: {}", category.name()));
    Ok(())
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    let ledger = context.session.ledger()?;
    if ledger.categories().is_empty() {
        io::print_info("No categories defined.");
        return Ok(());
    }
    for (index, category) in ledger.categories().iter().enumerate() {
        io::print_info(format!("{:>3}. {}", index + 1, category.name()));
    }
    Ok(())
}
