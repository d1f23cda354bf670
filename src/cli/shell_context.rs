use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    core::Session,
    currency::CurrencyFormat,
};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler may touch: the budget session, preferences
/// and the command table itself.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: Session,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn currency_format(&self) -> CurrencyFormat {
        self.config.currency_format()
    }

    pub fn prompt(&self) -> String {
        match self.session.ledger() {
            Ok(ledger) => format!("budget({})> ", ledger.name()),
            Err(_) => "budget> ".to_string(),
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }
}
