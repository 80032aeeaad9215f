#[cfg(test)]
#[path = "command_line_test.rs"]
mod tests;

use crate::domain::models::resolve;
use crate::domain::models::Command;
use crate::domain::models::CommandHistoryEntry;
use crate::domain::models::HistoryKind;

/// Response list shown above the command input. Entries are only ever
/// appended, or all dropped by `clear`.
#[derive(Debug, Default)]
pub struct CommandLine {
    history: Vec<CommandHistoryEntry>,
}

impl CommandLine {
    pub fn history(&self) -> &[CommandHistoryEntry] {
        &self.history
    }

    pub fn responses(&self) -> impl Iterator<Item = &CommandHistoryEntry> {
        self.history
            .iter()
            .filter(|e| e.kind == HistoryKind::Response)
    }

    /// Records `raw` and its response, returning the command the caller still
    /// has to carry out. History-only commands (`help`, `clear`) and unknown
    /// input return `None`.
    pub fn submit(&mut self, raw: &str) -> Option<Command> {
        let resolution = resolve(raw)?;
        tracing::debug!(input = raw, "command submitted");

        let command = resolution.command();
        if command == Some(Command::Clear) {
            self.history.clear();
        } else {
            self.history.push(CommandHistoryEntry::input(raw.trim()));
        }
        self.history
            .push(CommandHistoryEntry::response(resolution.response()));

        match command {
            Some(Command::Help) | Some(Command::Clear) | None => None,
            other => other,
        }
    }
}
