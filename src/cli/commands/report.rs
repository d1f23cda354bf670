use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::{io, output};
use crate::core::utils::parse_amount;
use crate::tax::{TaxCalculator, TAX_SCHEDULE};

use super::usage_error;

const SUMMARY_USAGE: &str = "summary [--json]";
const TAX_USAGE: &str = "tax <monthly income>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Show every recorded entry", "list", cmd_list),
        CommandEntry::new(
            "budget",
            "Show the remaining budget after tax",
            "budget",
            cmd_budget,
        ),
        CommandEntry::new(
            "summary",
            "Show totals, tax and per-category spending",
            SUMMARY_USAGE,
            cmd_summary,
        ),
        CommandEntry::new(
            "tax",
            "Estimate the monthly tax for a monthly income",
            TAX_USAGE,
            cmd_tax,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.session.ledger()?;
    let format = context.currency_format();
    let mut count = 0;
    for entry in ledger.entries() {
        io::print_info(format!("{:<8} {}", entry.label(), entry.details(&format)));
        count += 1;
    }
    if count == 0 {
        io::print_info("No entries recorded yet.");
    }
    Ok(())
}

fn cmd_budget(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let remaining = context.session.remaining_budget()?;
    let format = context.currency_format();
    io::print_info(format!(
        "Remaining budget after tax: {}",
        format.format(remaining)
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let summary = context.session.summary()?;
    match args {
        [] => {}
        ["--json"] => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }
        _ => return Err(usage_error(SUMMARY_USAGE)),
    }

    let format = context.currency_format();
    output::section(format!("Budget summary for {}", summary.name));
    io::print_info(format!(
        "Total income:               {}",
        format.format(summary.total_income)
    ));
    io::print_info(format!(
        "Total expenses:             {}",
        format.format(summary.total_expenses)
    ));
    io::print_info(format!(
        "Monthly tax:                {}",
        format.format(summary.monthly_tax)
    ));
    io::print_info(format!(
        "Remaining budget after tax: {}",
        format.format(summary.remaining_budget)
    ));

    if summary.per_category.iter().any(|row| row.count > 0) {
        output::section("Expenses by category");
        for row in summary.per_category.iter().filter(|row| row.count > 0) {
            io::print_info(format!(
                "{:<16} {} ({} {})",
                row.category,
                format.format(row.total),
                row.count,
                if row.count == 1 { "entry" } else { "entries" }
            ));
        }
    }
    Ok(())
}

fn cmd_tax(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [income] = args else {
        return Err(usage_error(TAX_USAGE));
    };
    let monthly_income = parse_amount(income)?;
    let breakdown = TaxCalculator::breakdown(monthly_income);
    let bracket = TAX_SCHEDULE[breakdown.bracket];
    let format = context.currency_format();

    io::print_info(format!(
        "Annual income: {}",
        format.format(breakdown.annual_income)
    ));
    io::print_info(format!(
        "Annual tax:    {} (bracket {} of {}, {:.0}% marginal)",
        format.format(breakdown.annual_tax),
        breakdown.bracket + 1,
        TAX_SCHEDULE.len(),
        bracket.rate * 100.0
    ));
    io::print_info(format!(
        "Monthly tax:   {}",
        format.format(breakdown.monthly_tax)
    ));
    Ok(())
}
