//! Console input parsing
//!
//! Lines starting with `/` are commands; anything else is chat text.

use super::state::{Theme, View};

/// A parsed console input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Logout,
    Show(View),
    SetTheme(Theme),
    Vote { proposal_id: String, delta: i64 },
    Propose(Option<String>),
    Rename(String),
    Email(String),
    TeamDescription(String),
    ReseedAvatar,
    ChatOpen,
    ChatMinimize,
    ChatClose,
    Say(String),
    Invalid(String),
}

/// Parse one line of input
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return Command::Say(input.to_string());
    }

    let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (trimmed, ""),
    };
    let arg = if rest.is_empty() { None } else { Some(rest.to_string()) };

    match cmd {
        "/help" | "/h" => Command::Help,
        "/quit" | "/q" | "/exit" => Command::Quit,
        "/logout" => Command::Logout,
        "/view" | "/v" => match rest.parse::<View>() {
            Ok(view) => Command::Show(view),
            Err(e) => Command::Invalid(e),
        },
        "/dash" => Command::Show(View::Dashboard),
        "/teams" => Command::Show(View::Teams),
        "/props" | "/proposals" => Command::Show(View::Proposals),
        "/awards" => Command::Show(View::Awards),
        "/settings" => Command::Show(View::Settings),
        "/theme" => match rest.parse::<Theme>() {
            Ok(theme) => Command::SetTheme(theme),
            Err(e) => Command::Invalid(e),
        },
        "/up" | "/down" => match arg {
            Some(proposal_id) => Command::Vote {
                proposal_id,
                delta: if cmd == "/up" { 1 } else { -1 },
            },
            None => Command::Invalid(format!("Usage: {} <proposal-id>", cmd)),
        },
        "/propose" => Command::Propose(arg),
        "/name" => match arg {
            Some(name) => Command::Rename(name),
            None => Command::Invalid("Usage: /name <codename>".to_string()),
        },
        "/email" => match arg {
            Some(email) => Command::Email(email),
            None => Command::Invalid("Usage: /email <address>".to_string()),
        },
        "/team-desc" => match arg {
            Some(text) => Command::TeamDescription(text),
            None => Command::Invalid("Usage: /team-desc <text>".to_string()),
        },
        "/avatar" => Command::ReseedAvatar,
        "/chat" => Command::ChatOpen,
        "/min" => Command::ChatMinimize,
        "/close" => Command::ChatClose,
        other => Command::Invalid(format!("Unknown command: {}", other)),
    }
}
