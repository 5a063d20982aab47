use crate::analysis::AnalysisReport;
use crate::app::mode::AppMode;
use crate::app::Notification;

/// Borrowed snapshot of everything the UI draws in one frame
pub struct RenderState<'a> {
    pub mode: AppMode,
    pub text: &'a str,
    pub source: Option<&'a str>,
    pub command_line: &'a str,
    pub report: Option<&'a AnalysisReport>,
    pub notification: Option<&'a Notification>,
    pub show_help: bool,
    pub show_activity: bool,
    /// Pre-formatted activity entries, oldest first
    pub activity_lines: Vec<String>,
    /// Rows scrolled off the top of the result panels
    pub results_scroll: u16,
}

impl RenderState<'_> {
    /// Status line summary of the text buffer
    pub fn text_summary(&self) -> String {
        let chars = self.text.chars().count();
        let lines = if self.text.is_empty() {
            0
        } else {
            self.text.lines().count()
        };
        match self.source {
            Some(source) => format!("{} · {} chars · {} lines", source, chars, lines),
            None => format!("{} chars · {} lines", chars, lines),
        }
    }
}
