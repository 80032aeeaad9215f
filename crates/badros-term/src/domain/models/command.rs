#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use super::PanelId;

pub fn help_text() -> String {
    let text = r#"
Available commands:
- about: Open About module
- projects: Open Projects module
- skills: Open Skills module
- fun | funzone: Open Fun Zone module
- contact: Open Contact module
- help: Show this help
- clear: Clear command history
- exit | home: Return to dashboard
        "#;

    text.trim().to_string()
}

pub const CLEARED_TEXT: &str = "Command history cleared.";
pub const DASHBOARD_TEXT: &str = "Returning to dashboard.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open(PanelId),
    Help,
    Clear,
    Close,
}

impl Command {
    /// Maps an already normalized token onto the fixed vocabulary.
    pub fn parse(token: &str) -> Option<Command> {
        let command = match token {
            "about" => Command::Open(PanelId::About),
            "projects" => Command::Open(PanelId::Projects),
            "skills" => Command::Open(PanelId::Skills),
            "fun" | "funzone" => Command::Open(PanelId::FunZone),
            "contact" => Command::Open(PanelId::Contact),
            "help" => Command::Help,
            "clear" => Command::Clear,
            "exit" | "home" => Command::Close,
            _ => return None,
        };

        Some(command)
    }
}

/// Outcome of interpreting one line typed into the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Run { command: Command, response: String },
    NotFound { response: String },
}

impl Resolution {
    pub fn response(&self) -> &str {
        match self {
            Resolution::Run { response, .. } => response,
            Resolution::NotFound { response } => response,
        }
    }

    pub fn command(&self) -> Option<Command> {
        match self {
            Resolution::Run { command, .. } => Some(*command),
            Resolution::NotFound { .. } => None,
        }
    }
}

pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolves raw input without touching any display state. Blank input yields
/// `None` and must not produce a response.
pub fn resolve(raw: &str) -> Option<Resolution> {
    let token = normalize(raw);
    if token.is_empty() {
        return None;
    }

    let Some(command) = Command::parse(&token) else {
        return Some(Resolution::NotFound {
            response: format!(
                "Command not found: \"{raw}\". Type \"help\" for available commands."
            ),
        });
    };

    let response = match command {
        Command::Open(panel) => format!("Opening {} module...", panel.title()),
        Command::Help => help_text(),
        Command::Clear => CLEARED_TEXT.to_string(),
        Command::Close => DASHBOARD_TEXT.to_string(),
    };

    Some(Resolution::Run { command, response })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryKind {
    Input,
    Response,
}

/// A line shown above the command input, either the echoed input or the
/// reply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHistoryEntry {
    pub kind: HistoryKind,
    pub text: String,
}

impl CommandHistoryEntry {
    pub fn input(text: &str) -> CommandHistoryEntry {
        CommandHistoryEntry {
            kind: HistoryKind::Input,
            text: text.to_string(),
        }
    }

    pub fn response(text: &str) -> CommandHistoryEntry {
        CommandHistoryEntry {
            kind: HistoryKind::Response,
            text: text.to_string(),
        }
    }
}
