//! # Activity Log
//!
//! Caller-owned collector for human-readable, timestamped records of stock
//! changes. Nothing is collected unless the caller passes a log in; a fresh
//! `ActivityLog` is built per caller, never shared behind a default.
//!
//! ```rust
//! use stockpile_core::{ActivityLog, Inventory};
//!
//! let mut inventory = Inventory::new();
//! let mut log = ActivityLog::new();
//!
//! inventory.add("apple", 10, Some(&mut log)).unwrap();
//!
//! assert_eq!(log.len(), 1);
//! assert!(log.entries()[0].to_string().ends_with(": Added 10 of apple"));
//! ```

use chrono::{DateTime, Local};
use serde::Serialize;

/// Timestamp layout used when rendering entries (`2024-05-01 09:30:00.123456`).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One recorded stock change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    /// Local wall-clock time the change was applied.
    pub at: DateTime<Local>,

    /// What happened, e.g. `Added 10 of apple`.
    pub message: String,
}

impl std::fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.at.format(TIMESTAMP_FORMAT), self.message)
    }
}

/// Append-only list of [`ActivityEntry`] values.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message stamped with the current local time.
    pub fn record(&mut self, message: impl Into<String>) {
        self.entries.push(ActivityEntry {
            at: Local::now(),
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActivityEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ActivityLog {
    type Item = &'a ActivityEntry;
    type IntoIter = std::slice::Iter<'a, ActivityEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_entry_display() {
        let entry = ActivityEntry {
            at: Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
            message: "Added 3 of pear".to_string(),
        };
        assert_eq!(
            entry.to_string(),
            "2024-05-01 09:30:00.000000: Added 3 of pear"
        );
    }

    #[test]
    fn test_record_appends_in_order() {
        let mut log = ActivityLog::new();
        assert!(log.is_empty());

        log.record("first");
        log.record("second");

        let messages: Vec<&str> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert!(log.entries()[0].at <= log.entries()[1].at);
    }
}
