//! Diary entry record

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Default display format, matching the en-US locale string of a timestamp
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// One saved diary text block. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Creation time in milliseconds since the epoch
    pub id: i64,
    pub text: String,
    /// Creation instant
    pub date: DateTime<Utc>,
    /// Display timestamp, formatted once at creation
    pub timestamp: String,
}

impl DiaryEntry {
    pub fn new(id: i64, text: String, created: DateTime<Local>, timestamp_format: &str) -> Self {
        DiaryEntry {
            id,
            text,
            date: created.with_timezone(&Utc),
            timestamp: created.format(timestamp_format).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_entry_formats_timestamp() {
        let created = Local.with_ymd_and_hms(2025, 1, 17, 14, 5, 9).unwrap();
        let entry = DiaryEntry::new(1, "hello".to_string(), created, DEFAULT_TIMESTAMP_FORMAT);

        assert_eq!(entry.timestamp, "1/17/2025, 2:05:09 PM");
        assert_eq!(entry.date, created.with_timezone(&Utc));
    }

    #[test]
    fn test_serialized_field_names() {
        let created = Local.with_ymd_and_hms(2025, 1, 17, 9, 0, 0).unwrap();
        let entry = DiaryEntry::new(7, "note".to_string(), created, "%Y-%m-%d");
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"text\":\"note\""));
        assert!(json.contains("\"date\":"));
        assert!(json.contains("\"timestamp\":\"2025-01-17\""));
    }
}
