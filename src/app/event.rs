/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    LoadSample,
    Analyze,
    Reset,
    Edit,
    ToggleActivity,
    Help,
    Quit,
    InvalidCommand(String),
}
