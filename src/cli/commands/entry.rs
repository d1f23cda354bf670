use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::core::BudgetError;

use super::usage_error;

const INCOME_USAGE: &str = "income <source> <amount>";
const EXPENSE_USAGE: &str = "expense <description> <amount> <category>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("income", "Record an income entry", INCOME_USAGE, cmd_income),
        CommandEntry::new(
            "expense",
            "Record an expense against a known category",
            EXPENSE_USAGE,
            cmd_expense,
        ),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (source, amount) = match args {
        [source, amount] => (source.to_string(), amount.to_string()),
        [] if context.mode() == CliMode::Interactive => {
            context.session.ledger()?;
            let source = io::prompt_text(&context.theme, "Income source")?;
            let amount = io::prompt_text(&context.theme, "Income amount")?;
            (source, amount)
        }
        _ => return Err(usage_error(INCOME_USAGE)),
    };

    let income = context.session.add_income(&source, &amount)?;
    let format = context.currency_format();
    io::print_success(format!("Added income: {}", income.details(&format)));
    Ok(())
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (description, amount, category) = match args {
        [description, amount, category] => (
            description.to_string(),
            amount.to_string(),
            category.to_string(),
        ),
        [] if context.mode() == CliMode::Interactive => match prompt_expense(context)? {
            Some(fields) => fields,
            None => return Ok(()),
        },
        _ => return Err(usage_error(EXPENSE_USAGE)),
    };

    let expense = context
        .session
        .add_expense(&description, &amount, &category)?;
    let format = context.currency_format();
    io::print_success(format!("Added expense: {}", expense.details(&format)));
    Ok(())
}

/// Collects expense fields interactively; the category is chosen from the
/// active profile's list. `None` when the selection is cancelled.
fn prompt_expense(
    context: &ShellContext,
) -> Result<Option<(String, String, String)>, CommandError> {
    let ledger = context.session.ledger()?;
    let names: Vec<&str> = ledger.categories().iter().map(|c| c.name()).collect();
    if names.is_empty() {
        return Err(CommandError::Core(BudgetError::InvalidInput(
            "the active profile has no categories; add one with `category add <name>`".into(),
        )));
    }

    let description = io::prompt_text(&context.theme, "Expense description")?;
    let amount = io::prompt_text(&context.theme, "Expense amount")?;
    let Some(index) = io::select_item(&context.theme, "Expense type", &names)? else {
        io::print_info("Expense cancelled.");
        return Ok(None);
    };
    Ok(Some((description, amount, names[index].to_string())))
}
