//! Immutable log records

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;

use super::level::Level;

/// Timestamp layout, second precision
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hands out message ids, starting at 1
#[derive(Debug)]
pub struct MessageIds {
    next: AtomicU64,
}

impl MessageIds {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Reserve the next id
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for MessageIds {
    fn default() -> Self {
        Self::new()
    }
}

/// A single log event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: u64,
    timestamp: String,
    level: Level,
    text: String,
    params: Vec<String>,
}

impl Message {
    /// Create a message stamped with the current local time
    pub fn new(id: u64, level: Level, text: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            id,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            text: text.into(),
            params,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Auxiliary parameters. Carried along but never rendered.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Error report line: `timestamp LEVEL id text`
    pub fn report_line(&self) -> String {
        format!("{} {} {} {}", self.timestamp, self.level, self.id, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_ids_start_at_one() {
        let ids = MessageIds::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.next_id(), 3);
    }

    #[test]
    fn test_timestamp_has_second_precision() {
        let message = Message::new(1, Level::Info, "hello", Vec::new());
        assert!(NaiveDateTime::parse_from_str(message.timestamp(), TIMESTAMP_FORMAT).is_ok());
        assert_eq!(message.timestamp().len(), "2026-01-21 14:30:45".len());
    }

    #[test]
    fn test_params_are_kept_in_order() {
        let message = Message::new(
            7,
            Level::Debug,
            "with params",
            vec!["a".to_string(), "b".to_string()],
        );
        assert_eq!(message.params(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_report_line() {
        let message = Message::new(42, Level::Error, "disk on fire", Vec::new());
        assert_eq!(
            message.report_line(),
            format!("{} ERROR 42 disk on fire", message.timestamp())
        );
    }
}
