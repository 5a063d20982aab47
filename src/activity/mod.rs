//! Interaction log for the terminal host.
//!
//! Every user-visible interaction is classified into an [`ObjectKind`] tag,
//! stamped, kept in a bounded in-memory log for the activity console, and
//! mirrored to `tracing`.

pub mod classify;

pub use classify::{classify, describe, event_kind, EventKind, Interaction, ObjectKind, Panel};

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: EventKind,
    pub object: ObjectKind,
    pub details: String,
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.kind,
            self.object
        )?;
        if !self.details.is_empty() {
            write!(f, " - {}", self.details)?;
        }
        Ok(())
    }
}

/// Bounded, most-recent-last record of interactions.
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
    viewed: HashSet<Panel>,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
            viewed: HashSet::new(),
        }
    }

    /// Records an interaction. Panel views are only recorded the first time
    /// each panel is shown; returns whether an entry was added.
    pub fn record(&mut self, interaction: &Interaction) -> bool {
        if let Interaction::PanelShown(panel) = interaction {
            if !self.viewed.insert(*panel) {
                return false;
            }
        }

        let object = classify(interaction);
        let entry = ActivityEntry {
            timestamp: Utc::now(),
            kind: event_kind(interaction),
            object,
            details: describe(interaction, object),
        };

        info!(
            target: "activity",
            kind = %entry.kind,
            object = %entry.object,
            details = %entry.details,
            "interaction"
        );

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        true
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    /// The last `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> Vec<&ActivityEntry> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries.iter().skip(skip).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppEvent;

    #[test]
    fn test_panel_view_recorded_once() {
        let mut log = ActivityLog::new(10);
        assert!(log.record(&Interaction::PanelShown(Panel::Results)));
        assert!(!log.record(&Interaction::PanelShown(Panel::Results)));
        assert!(log.record(&Interaction::PanelShown(Panel::Help)));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_commands_always_recorded() {
        let mut log = ActivityLog::new(10);
        log.record(&Interaction::Event(&AppEvent::Analyze));
        log.record(&Interaction::Event(&AppEvent::Analyze));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = ActivityLog::new(2);
        log.record(&Interaction::Startup { title: "first" });
        log.record(&Interaction::Event(&AppEvent::Reset));
        log.record(&Interaction::Event(&AppEvent::Help));

        let objects: Vec<ObjectKind> = log.entries().map(|e| e.object).collect();
        assert_eq!(objects, vec![ObjectKind::Reset, ObjectKind::Help]);
    }

    #[test]
    fn test_recent_returns_tail_in_order() {
        let mut log = ActivityLog::new(10);
        log.record(&Interaction::Startup { title: "t" });
        log.record(&Interaction::Event(&AppEvent::LoadSample));
        log.record(&Interaction::Event(&AppEvent::Analyze));

        let recent = log.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].object, ObjectKind::Sample);
        assert_eq!(recent[1].object, ObjectKind::Analysis);
        assert_eq!(log.recent(50).len(), 3);
    }

    #[test]
    fn test_entry_display_format() {
        let mut log = ActivityLog::new(4);
        log.record(&Interaction::Startup { title: "lexicount" });
        let line = log.entries().next().unwrap().to_string();
        assert!(line.ends_with(", view, page - Page loaded: lexicount"), "{}", line);
        assert!(line.contains('T'));
    }

    #[test]
    fn test_entry_display_without_details() {
        let entry = ActivityEntry {
            timestamp: Utc::now(),
            kind: EventKind::Command,
            object: ObjectKind::Reset,
            details: String::new(),
        };
        assert!(entry.to_string().ends_with(", command, reset"));
    }
}
