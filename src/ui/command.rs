//! Command parsing for the TUI command deck
//!
//! Parses user input in Command mode, supporting:
//! - `:a` or `:analyze` → Analyze the text buffer
//! - `:c` or `:clear` → Clear text and results
//! - `:s` or `:sample` → Load the built-in sample essay
//! - `:e` or `:edit` → Edit the text buffer
//! - `:l` or `:log` → Toggle the activity console
//! - `:h` or `:help` → Help
//! - `:q` or `:quit` → Quit
//! - `@filename` → Load file (.pdf, .epub, otherwise plain text)
//! - `@@` → Load clipboard

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Analyze,
    Clear,
    Sample,
    Edit,
    ToggleLog,
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd.trim() {
            "a" | "analyze" => Command::Analyze,
            "c" | "clear" => Command::Clear,
            "s" | "sample" => Command::Sample,
            "e" | "edit" => Command::Edit,
            "l" | "log" => Command::ToggleLog,
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Analyze => AppEvent::Analyze,
        Command::Clear => AppEvent::Reset,
        Command::Sample => AppEvent::LoadSample,
        Command::Edit => AppEvent::Edit,
        Command::ToggleLog => AppEvent::ToggleActivity,
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
