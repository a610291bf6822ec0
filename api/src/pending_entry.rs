//! The daemon's pending-entry record.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// One entry the automation daemon has parked, awaiting a human decision.
///
/// Only `id` is interpreted by client logic; every other field is owned by
/// the daemon. Fields this build does not know about are kept verbatim in
/// `extra` so a record survives a round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingEntry {
    pub id: i64,
    pub task_name: String,
    pub title: String,
    pub url: String,
    pub approved: bool,
    pub added: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_daemon_record() {
        let json = r#"{
            "id": 42,
            "task_name": "sync-shows",
            "title": "Some Show S01E03",
            "url": "https://example.test/42",
            "approved": false,
            "added": "2026-03-01T12:00:00Z"
        }"#;

        let entry: PendingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 42);
        assert_eq!(entry.task_name, "sync-shows");
        assert!(!entry.approved);
        assert!(entry.extra.is_empty());
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let json = r#"{
            "id": 7,
            "task_name": "sync-movies",
            "title": "Some Movie",
            "url": "https://example.test/7",
            "approved": true,
            "added": "2026-03-01T12:00:00Z",
            "quality": "1080p",
            "seeders": 14
        }"#;

        let entry: PendingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.extra["quality"], "1080p");
        assert_eq!(entry.extra["seeders"], 14);

        let reencoded = serde_json::to_value(&entry).unwrap();
        assert_eq!(reencoded["quality"], "1080p");
        assert_eq!(reencoded["seeders"], 14);
    }
}
