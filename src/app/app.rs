use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use super::sample::SAMPLE_TEXT;
use crate::activity::{ActivityLog, Interaction, Panel};
use crate::analysis::{analyze, AnalysisReport};
use crate::config::Config;
use crate::input::{self, LoadError, LoadedDocument};
use crate::ui::command::{command_to_app_event, parse_command};
use crossterm::event::KeyCode;
use tracing::{info, warn};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// One-line message shown above the command deck until the next action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

pub struct App {
    mode: AppMode,
    config: Config,
    text: String,
    source: Option<String>,
    command_line: String,
    report: Option<AnalysisReport>,
    results_scroll: u16,
    notification: Option<Notification>,
    show_help: bool,
    show_activity: bool,
    activity: ActivityLog,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut activity = ActivityLog::new(config.activity.capacity);
        activity.record(&Interaction::Startup {
            title: &config.activity.title,
        });

        Self {
            mode: AppMode::Command,
            show_activity: config.display.show_activity,
            config,
            text: String::new(),
            source: None,
            command_line: String::new(),
            report: None,
            results_scroll: 0,
            notification: None,
            show_help: false,
            activity,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn results_scroll(&self) -> u16 {
        self.results_scroll
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        self.activity.record(&Interaction::Event(&event));
        self.show_help = false;

        match event {
            AppEvent::LoadFile(path) => self.load_with(|| input::load_path(&path)),
            AppEvent::LoadClipboard => self.load_with(input::clipboard::load),
            AppEvent::LoadSample => self.set_document(LoadedDocument {
                text: SAMPLE_TEXT.to_string(),
                source: "sample".to_string(),
            }),
            AppEvent::Analyze => self.analyze_text(),
            AppEvent::Reset => self.reset(),
            AppEvent::Edit => {
                self.mode = AppMode::Editing;
                self.notification = None;
                self.activity.record(&Interaction::PanelShown(Panel::Editor));
            }
            AppEvent::ToggleActivity => {
                self.show_activity = !self.show_activity;
                if self.show_activity {
                    self.activity.record(&Interaction::PanelShown(Panel::Activity));
                }
            }
            AppEvent::Help => {
                self.show_help = true;
                self.activity.record(&Interaction::PanelShown(Panel::Help));
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
            AppEvent::InvalidCommand(input) => {
                self.notify(
                    NotificationLevel::Warning,
                    format!("Unknown command: {} (:h for help)", input),
                );
            }
        }
    }

    /// Replaces the text buffer. Earlier results stay on screen until the
    /// next analysis.
    pub fn set_document(&mut self, document: LoadedDocument) {
        self.notify(
            NotificationLevel::Info,
            format!("Loaded {} ({} chars)", document.source, document.text.chars().count()),
        );
        self.text = document.text;
        self.source = Some(document.source);
    }

    fn load_with<F>(&mut self, load: F)
    where
        F: FnOnce() -> Result<LoadedDocument, LoadError>,
    {
        match load() {
            Ok(document) => self.set_document(document),
            Err(e) => {
                warn!(error = %e, "load failed");
                self.notify(NotificationLevel::Error, e.to_string());
            }
        }
    }

    /// Blank text leaves the previous results and stats untouched.
    fn analyze_text(&mut self) {
        match analyze(&self.text) {
            Ok(report) => {
                info!(
                    tokens = report.token_count,
                    words = report.stats.words,
                    source = self.source.as_deref().unwrap_or("editor"),
                    "analysis complete"
                );
                self.notify(
                    NotificationLevel::Info,
                    format!("Analyzed {} tokens", report.token_count),
                );
                self.report = Some(report);
                self.results_scroll = 0;
                self.activity.record(&Interaction::PanelShown(Panel::Results));
            }
            Err(e) => self.notify(NotificationLevel::Warning, e.to_string()),
        }
    }

    fn reset(&mut self) {
        info!("reset");
        self.text.clear();
        self.source = None;
        self.report = None;
        self.results_scroll = 0;
        self.command_line.clear();
        self.notify(NotificationLevel::Info, "Cleared text and results".to_string());
    }

    fn notify(&mut self, level: NotificationLevel, message: String) {
        self.notification = Some(Notification { level, message });
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match self.mode {
            AppMode::Command => self.handle_command_key(key),
            AppMode::Editing => self.handle_editing_key(key),
            AppMode::Quit => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => self.command_line.push(c),
            KeyCode::Backspace => {
                self.command_line.pop();
            }
            KeyCode::Enter => self.submit_command(),
            KeyCode::PageDown => self.scroll_results_down(self.config.display.scroll_step),
            KeyCode::PageUp => self.scroll_results_up(self.config.display.scroll_step),
            KeyCode::Down => self.scroll_results_down(1),
            KeyCode::Up => self.scroll_results_up(1),
            KeyCode::Esc => {
                self.command_line.clear();
                self.show_help = false;
                self.notification = None;
            }
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) => self.text.push(c),
            KeyCode::Enter => self.text.push('\n'),
            KeyCode::Tab => self.text.push('\t'),
            KeyCode::Backspace => self.delete_grapheme(),
            KeyCode::Esc => self.mode = AppMode::Command,
            _ => {}
        }
    }

    /// Removes the last user-perceived character, so combining marks and
    /// emoji sequences go in one keystroke.
    fn delete_grapheme(&mut self) {
        if let Some((index, _)) = self.text.grapheme_indices(true).next_back() {
            self.text.truncate(index);
        }
    }

    /// Result panels share one offset; it stops at the longest list.
    fn scroll_results_down(&mut self, rows: u16) {
        let limit = self.report.as_ref().map_or(0, result_rows);
        self.results_scroll = self.results_scroll.saturating_add(rows).min(limit);
    }

    fn scroll_results_up(&mut self, rows: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(rows);
    }

    /// Enter on an empty deck does nothing.
    fn submit_command(&mut self) {
        let line = std::mem::take(&mut self.command_line);
        if line.trim().is_empty() {
            return;
        }
        let event = command_to_app_event(parse_command(&line));
        self.handle_event(event);
    }

    pub fn render_state(&self) -> RenderState<'_> {
        let activity_lines = if self.show_activity {
            self.activity
                .recent(self.config.display.activity_rows as usize)
                .iter()
                .map(|entry| entry.to_string())
                .collect()
        } else {
            vec![]
        };

        RenderState {
            mode: self.mode,
            text: &self.text,
            source: self.source.as_deref(),
            command_line: &self.command_line,
            report: self.report.as_ref(),
            notification: self.notification.as_ref(),
            show_help: self.show_help,
            show_activity: self.show_activity,
            activity_lines,
            results_scroll: self.results_scroll,
        }
    }
}

/// Rows in the tallest result panel: pronoun headings plus entries, or the
/// longer flat list.
fn result_rows(report: &AnalysisReport) -> u16 {
    let pronouns: usize = report
        .pronouns
        .iter()
        .filter(|(_, table)| !table.is_empty())
        .map(|(_, table)| table.len() + 1)
        .sum();
    let longest = pronouns
        .max(report.prepositions.len())
        .max(report.articles.len());
    u16::try_from(longest.saturating_sub(1)).unwrap_or(u16::MAX)
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
