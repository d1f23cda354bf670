use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// One shell command plus the alternate spellings that dispatch to it.
pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            aliases: &[],
            description,
            usage,
            handler,
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    fn answers_to(&self, input: &str) -> bool {
        self.name.eq_ignore_ascii_case(input)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(input))
    }
}

/// Command table kept in display order. Lookups are case-insensitive and
/// accept aliases; listings only show canonical names.
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    /// Builds the table, placing entries named in `order` first (in that order)
    /// and the rest after them. A later entry with an already-claimed name is
    /// ignored.
    pub fn ordered(entries: Vec<CommandEntry>, order: &[&str]) -> Self {
        let mut entries = entries;
        entries.sort_by_key(|entry| {
            order
                .iter()
                .position(|name| entry.name.eq_ignore_ascii_case(name))
                .unwrap_or(order.len())
        });

        let mut kept: Vec<CommandEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if kept.iter().all(|existing| !existing.answers_to(entry.name)) {
                kept.push(entry);
            }
        }
        Self { entries: kept }
    }

    /// Entry for a typed command name or alias.
    pub fn resolve(&self, input: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|entry| entry.answers_to(input))
    }

    pub fn list(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn handler(&self, input: &str) -> Option<CommandHandler> {
        self.resolve(input).map(|entry| entry.handler)
    }
}
