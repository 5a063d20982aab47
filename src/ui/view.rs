use crate::analysis::{AnalysisReport, BasicStats, FrequencyTable, GroupedFrequencies};
use crate::app::{mode::AppMode, RenderState};
use crate::ui::theme::{colors, notification_color};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const NO_DATA: &str = "No data to display. Please analyze a text.";
pub const NO_MATCHES: &str = "No matches found in the text.";
pub const NO_PRONOUNS: &str = "No pronouns found in the text.";

const HELP_TEXT: &str = "\
:e  :edit      edit the text (Esc to leave)
:a  :analyze   analyze the text
:c  :clear     clear text and results
:s  :sample    load the sample essay
:l  :log       toggle the activity console
@file          load .txt / .pdf / .epub
@@             load from clipboard
PgUp PgDn      scroll the results
:q  :quit      quit";

pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `(label, value)` rows for the statistics panel.
pub fn stats_rows(stats: &BasicStats) -> [(&'static str, usize); 5] {
    [
        ("Letters", stats.letters),
        ("Words", stats.words),
        ("Spaces", stats.spaces),
        ("Newlines", stats.newlines),
        ("Special symbols", stats.specials),
    ]
}

/// Display rows for a table, count-descending, words padded to one column.
pub fn entry_rows(table: &FrequencyTable) -> Vec<String> {
    let sorted = table.sorted();
    let width = sorted
        .iter()
        .map(|(word, _)| word.width())
        .max()
        .unwrap_or(0);

    sorted
        .iter()
        .map(|(word, count)| {
            let pad = width - word.width();
            format!("{}{}  {}", word, " ".repeat(pad), count)
        })
        .collect()
}

/// Headings and rows for grouped counts. Categories without matches are
/// skipped; an empty result means nothing matched at all.
pub fn grouped_rows(grouped: &GroupedFrequencies) -> Vec<(String, Vec<String>)> {
    grouped
        .iter()
        .filter(|(_, table)| !table.is_empty())
        .map(|(name, table)| {
            (
                format!("{} Pronouns", capitalize_first(name)),
                entry_rows(table),
            )
        })
        .collect()
}

/// Plain-text rendering of a report, used by `--report`. Every matched
/// token is listed.
pub fn report_text(report: &AnalysisReport) -> String {
    let mut out = String::from("Statistics\n");
    for (label, value) in stats_rows(&report.stats) {
        out.push_str(&format!("  {:<16}{}\n", label, value));
    }

    out.push_str("\nPronouns\n");
    let groups = grouped_rows(&report.pronouns);
    if groups.is_empty() {
        out.push_str(&format!("  {}\n", NO_PRONOUNS));
    }
    for (heading, rows) in groups {
        out.push_str(&format!("  {}\n", heading));
        for row in rows {
            out.push_str(&format!("    {}\n", row));
        }
    }

    for (title, table) in [
        ("Prepositions", &report.prepositions),
        ("Indefinite Articles", &report.articles),
    ] {
        out.push_str(&format!("\n{}\n", title));
        if table.is_empty() {
            out.push_str(&format!("  {}\n", NO_MATCHES));
        }
        for row in entry_rows(table) {
            out.push_str(&format!("  {}\n", row));
        }
    }
    out
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(colors::dimmed()))
        .style(Style::default().bg(colors::background()))
}

fn dimmed_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(colors::dimmed()),
    ))
}

pub fn render_stats(stats: Option<&BasicStats>) -> Paragraph<'static> {
    let stats = stats.copied().unwrap_or_default();
    let lines: Vec<Line> = stats_rows(&stats)
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<16}", label), Style::default().fg(colors::dimmed())),
                Span::styled(
                    value.to_string(),
                    Style::default()
                        .fg(colors::text())
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    Paragraph::new(lines).block(panel("Statistics"))
}

pub fn render_token_list(
    title: &str,
    table: Option<&FrequencyTable>,
    scroll: u16,
) -> Paragraph<'static> {
    let lines: Vec<Line> = match table {
        None => vec![dimmed_line(NO_DATA)],
        Some(table) if table.is_empty() => vec![dimmed_line(NO_MATCHES)],
        Some(table) => entry_rows(table)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(colors::text()))))
            .collect(),
    };

    Paragraph::new(lines)
        .block(panel(title))
        .scroll((scroll, 0))
}

pub fn render_pronouns(grouped: Option<&GroupedFrequencies>, scroll: u16) -> Paragraph<'static> {
    let lines: Vec<Line> = match grouped {
        None => vec![dimmed_line(NO_DATA)],
        Some(grouped) => {
            let groups = grouped_rows(grouped);
            if groups.is_empty() {
                vec![dimmed_line(NO_PRONOUNS)]
            } else {
                let mut lines = Vec::new();
                for (heading, rows) in groups {
                    lines.push(Line::from(Span::styled(
                        heading,
                        Style::default()
                            .fg(colors::accent())
                            .add_modifier(Modifier::BOLD),
                    )));
                    lines.extend(rows.into_iter().map(|row| {
                        Line::from(Span::styled(
                            format!("  {}", row),
                            Style::default().fg(colors::text()),
                        ))
                    }));
                }
                lines
            }
        }
    };

    Paragraph::new(lines)
        .block(panel("Pronouns"))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
}

/// Text buffer panel, scrolled so the end of the text stays visible.
pub fn render_text(state: &RenderState, height: u16) -> Paragraph<'static> {
    let editing = state.mode == AppMode::Editing;
    let mut text = state.text.to_string();
    if editing {
        text.push('▏');
    }

    let line_count = text.split('\n').count() as u16;
    let visible = height.saturating_sub(2);
    let scroll = line_count.saturating_sub(visible);

    let title = if editing {
        format!("Text (editing) · {}", state.text_summary())
    } else {
        format!("Text · {}", state.text_summary())
    };

    let body = if state.text.is_empty() && !editing {
        Paragraph::new(dimmed_line("Type :e to write text, :s for a sample, or @file to load one"))
    } else {
        Paragraph::new(text).style(Style::default().fg(colors::text()))
    };

    body.block(panel(&title)).scroll((scroll, 0))
}

pub fn render_help() -> Paragraph<'static> {
    Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(colors::text()))
        .block(panel("Help"))
}

pub fn render_activity(lines: &[String]) -> Paragraph<'static> {
    let lines: Vec<Line> = lines.iter().map(|line| dimmed_line(line)).collect();
    Paragraph::new(lines).block(panel("Activity"))
}

pub fn render_command_deck(frame: &mut Frame, area: Rect, state: &RenderState) {
    frame.render_widget(Clear, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    if let Some(notification) = state.notification {
        let message = Paragraph::new(notification.message.clone()).style(
            Style::default()
                .fg(notification_color(notification.level))
                .bg(colors::background()),
        );
        frame.render_widget(message, rows[0]);
    }

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(rows[1]);

    let accent_bar =
        Paragraph::new("▌").style(Style::default().fg(colors::accent()).bg(colors::surface()));
    frame.render_widget(accent_bar, layout[0]);

    let input_text = match state.mode {
        AppMode::Editing => " EDITING  Esc to return to commands".to_string(),
        AppMode::Command if state.command_line.is_empty() => {
            " COMMAND  :a analyze · :e edit · @file · :h help".to_string()
        }
        AppMode::Command => format!(" COMMAND  {}", state.command_line),
        AppMode::Quit => " QUIT ".to_string(),
    };

    let input_widget = Paragraph::new(input_text)
        .alignment(Alignment::Left)
        .style(Style::default().fg(colors::text()).bg(colors::surface()));
    frame.render_widget(input_widget, layout[1]);
}

/// Draws one full frame from a render snapshot.
pub fn render_frame(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(colors::background())), area);

    let activity_height = if state.show_activity {
        state.activity_lines.len() as u16 + 2
    } else {
        0
    };

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(activity_height),
            Constraint::Length(2),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(7)])
        .split(columns[0]);

    if state.show_help {
        frame.render_widget(render_help(), left[0]);
    } else {
        frame.render_widget(render_text(state, left[0].height), left[0]);
    }
    frame.render_widget(render_stats(state.report.map(|r| &r.stats)), left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ])
        .split(columns[1]);

    frame.render_widget(
        render_pronouns(state.report.map(|r| &r.pronouns), state.results_scroll),
        right[0],
    );
    frame.render_widget(
        render_token_list(
            "Prepositions",
            state.report.map(|r| &r.prepositions),
            state.results_scroll,
        ),
        right[1],
    );
    frame.render_widget(
        render_token_list(
            "Indefinite Articles",
            state.report.map(|r| &r.articles),
            state.results_scroll,
        ),
        right[2],
    );

    if state.show_activity {
        frame.render_widget(render_activity(&state.activity_lines), outer[1]);
    }

    render_command_deck(frame, outer[2], state);
}
