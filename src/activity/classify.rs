use crate::app::AppEvent;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    View,
    Command,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::View => write!(f, "view"),
            EventKind::Command => write!(f, "command"),
        }
    }
}

/// Screen areas whose first appearance is worth logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Editor,
    Results,
    Help,
    Activity,
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Editor => write!(f, "editor"),
            Panel::Results => write!(f, "results"),
            Panel::Help => write!(f, "help"),
            Panel::Activity => write!(f, "activity"),
        }
    }
}

/// What happened, before classification.
#[derive(Debug, Clone, Copy)]
pub enum Interaction<'a> {
    Startup { title: &'a str },
    PanelShown(Panel),
    Event(&'a AppEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Page,
    Panel,
    File,
    Clipboard,
    Sample,
    Analysis,
    Reset,
    Help,
    Editor,
    Navigation,
    Unknown,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Page => "page",
            ObjectKind::Panel => "panel",
            ObjectKind::File => "file",
            ObjectKind::Clipboard => "clipboard",
            ObjectKind::Sample => "sample",
            ObjectKind::Analysis => "analysis",
            ObjectKind::Reset => "reset",
            ObjectKind::Help => "help",
            ObjectKind::Editor => "editor",
            ObjectKind::Navigation => "navigation",
            ObjectKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

pub fn event_kind(interaction: &Interaction) -> EventKind {
    match interaction {
        Interaction::Startup { .. } | Interaction::PanelShown(_) => EventKind::View,
        Interaction::Event(_) => EventKind::Command,
    }
}

pub fn classify(interaction: &Interaction) -> ObjectKind {
    match interaction {
        Interaction::Startup { .. } => ObjectKind::Page,
        Interaction::PanelShown(_) => ObjectKind::Panel,
        Interaction::Event(event) => match event {
            AppEvent::LoadFile(_) => ObjectKind::File,
            AppEvent::LoadClipboard => ObjectKind::Clipboard,
            AppEvent::LoadSample => ObjectKind::Sample,
            AppEvent::Analyze => ObjectKind::Analysis,
            AppEvent::Reset => ObjectKind::Reset,
            AppEvent::Help => ObjectKind::Help,
            AppEvent::Edit => ObjectKind::Editor,
            AppEvent::ToggleActivity | AppEvent::Quit => ObjectKind::Navigation,
            AppEvent::InvalidCommand(_) => ObjectKind::Unknown,
        },
    }
}

const UNKNOWN_PREVIEW_CHARS: usize = 30;

/// Human-readable context for an interaction once its tag is known.
pub fn describe(interaction: &Interaction, object: ObjectKind) -> String {
    match (interaction, object) {
        (Interaction::Startup { title }, _) => format!("Page loaded: {}", title),
        (Interaction::PanelShown(panel), _) => format!("Panel: {}", panel),
        (Interaction::Event(AppEvent::LoadFile(path)), _) => format!("File: {}", path),
        (Interaction::Event(AppEvent::InvalidCommand(input)), _) => {
            if input.trim().is_empty() {
                "unnamed".to_string()
            } else {
                let preview: String = input.chars().take(UNKNOWN_PREVIEW_CHARS).collect();
                format!("{}...", preview.trim())
            }
        }
        (Interaction::Event(AppEvent::ToggleActivity), _) => "Activity console toggle".to_string(),
        (Interaction::Event(AppEvent::Quit), _) => "Quit".to_string(),
        (Interaction::Event(AppEvent::Edit), _) => "Edit text".to_string(),
        (Interaction::Event(_), ObjectKind::Clipboard) => "Clipboard paste".to_string(),
        (Interaction::Event(_), ObjectKind::Sample) => "Sample text".to_string(),
        (Interaction::Event(_), _) => String::new(),
    }
}
