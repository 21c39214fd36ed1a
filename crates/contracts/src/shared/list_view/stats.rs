use super::filter::parse_timestamp;
use super::row::Row;
use super::schema::EntitySchema;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const TOTAL: &str = "total";
pub const LAST_24H: &str = "last_24h";

/// Label -> count, as shown in the summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats(BTreeMap<String, usize>);

impl Stats {
    pub fn get(&self, label: &str) -> usize {
        self.0.get(label).copied().unwrap_or(0)
    }

    pub fn insert(&mut self, label: impl Into<String>, count: usize) {
        self.0.insert(label.into(), count);
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn bump(&mut self, label: String) {
        *self.0.entry(label).or_insert(0) += 1;
    }
}

/// `status.pending`, `priority.high`, ...
pub fn stat_label(field: &str, value: &str) -> String {
    format!("{}.{}", field, value)
}

/// Single pass over the resident rows.
///
/// Produces `total`, a count per vocabulary value of every enumerated field
/// (zeros included) and `last_24h` when the schema names a created-at field.
pub fn compute_stats(rows: &[Row], schema: &EntitySchema, now: DateTime<Utc>) -> Stats {
    let mut stats = Stats::default();
    stats.insert(TOTAL, rows.len());

    let enum_fields: Vec<_> = schema.enum_fields().collect();
    for field in &enum_fields {
        if let Some(vocabulary) = field.vocabulary() {
            for value in vocabulary.ui_values() {
                stats.insert(stat_label(field.name, value), 0);
            }
        }
    }

    let window_start = now - Duration::hours(24);
    if schema.created_field.is_some() {
        stats.insert(LAST_24H, 0);
    }

    for row in rows {
        for field in &enum_fields {
            let value = row.get_or_empty(field.name);
            if !value.is_empty() {
                stats.bump(stat_label(field.name, value));
            }
        }
        if let Some(created) = schema.created_field {
            let recent = row
                .get(created)
                .and_then(parse_timestamp)
                .is_some_and(|ts| ts >= window_start && ts <= now);
            if recent {
                stats.bump(LAST_24H.to_string());
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::testing::{ticket, TICKETS};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_counts_by_status_and_recency() {
        let rows = vec![
            ticket("1", "A", "pending").with("created_at", "2024-03-10T09:00:00Z"),
            ticket("2", "B", "pending").with("created_at", "2024-03-09T12:00:00Z"),
            ticket("3", "C", "completed").with("created_at", "2024-03-09T11:59:59Z"),
            ticket("4", "D", "on-hold").with("created_at", "not a date"),
        ];
        let stats = compute_stats(&rows, &TICKETS, now());
        assert_eq!(stats.get(TOTAL), 4);
        assert_eq!(stats.get("status.pending"), 2);
        assert_eq!(stats.get("status.completed"), 1);
        assert_eq!(stats.get("status.on-hold"), 1);
        assert!(stats.contains("status.in-progress"));
        assert_eq!(stats.get("status.in-progress"), 0);
        assert_eq!(stats.get("priority.medium"), 4);
        assert_eq!(stats.get(LAST_24H), 2);
    }

    #[test]
    fn test_stats_are_pure() {
        let rows = vec![ticket("1", "A", "pending"), ticket("2", "B", "completed")];
        let snapshot = rows.clone();
        let first = compute_stats(&rows, &TICKETS, now());
        let second = compute_stats(&rows, &TICKETS, now());
        assert_eq!(first, second);
        assert_eq!(rows, snapshot);
    }

    #[test]
    fn test_empty_rows() {
        let stats = compute_stats(&[], &TICKETS, now());
        assert_eq!(stats.get(TOTAL), 0);
        assert_eq!(stats.get(LAST_24H), 0);
        assert_eq!(stats.get("status.pending"), 0);
    }
}
