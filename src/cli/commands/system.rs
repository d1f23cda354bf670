use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::{io, output};
use crate::config::Config;
use crate::utils::build_info;

use super::usage_error;

const CONFIG_USAGE: &str = "config [show|get <key>|set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change preferences",
            CONFIG_USAGE,
            cmd_config,
        ),
        CommandEntry::new("help", "List commands or show usage", "help [command]", cmd_help),
        CommandEntry::new("version", "Show build information", "version", cmd_version),
        CommandEntry::new("exit", "Leave the shell (alias: quit)", "exit", cmd_exit)
            .with_aliases(&["quit"]),
    ]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            for key in Config::keys() {
                let value = context.config.get(key).unwrap_or_default();
                io::print_info(format!("{:<11} {}", key, value));
            }
            io::print_hint(format!("stored at {}", context.config_manager.path().display()));
            Ok(())
        }
        ["get", key] => {
            let value = context.config.get(key).ok_or_else(|| {
                CommandError::InvalidArguments(format!("unknown config key `{}`", key))
            })?;
            io::print_info(value);
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            let mut updated = context.config.clone();
            updated.set(key, &value.join(" "))?;
            context.config_manager.save(&updated)?;
            context.config = updated;
            if key.eq_ignore_ascii_case("color") {
                output::set_color_enabled(
                    context.config.ui_color_enabled && context.mode() == CliMode::Interactive,
                );
            }
            io::print_success(format!(
                "Set {} = {}",
                key.to_ascii_lowercase(),
                context.config.get(key).unwrap_or_default()
            ));
            Ok(())
        }
        _ => Err(usage_error(CONFIG_USAGE)),
    }
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let entry = context
            .registry
            .resolve(name)
            .ok_or_else(|| CommandError::InvalidArguments(format!("unknown command `{}`", name)))?;
        io::print_info(format!("{} - {}", entry.name, entry.description));
        io::print_info(format!("usage: {}", entry.usage));
        return Ok(());
    }

    output::section("Commands");
    for entry in context.registry.list() {
        io::print_info(format!("{:<44} {}", entry.usage, entry.description));
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(build_info::current().summary());
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
