//! Client-side filter/sort stage.
//!
//! Used when backend filtering is not available or not trusted. Every
//! predicate is pure; rows are never mutated in place except by `sort_rows`.

use super::query::{QueryState, SortSpec};
use super::row::Row;
use super::schema::EntitySchema;
use super::status::Vocabulary;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Ordering;

/// Filter key for the inclusive lower date bound.
pub const DATE_FROM: &str = "date_from";
/// Filter key for the inclusive upper date bound.
pub const DATE_TO: &str = "date_to";

/// Parses RFC 3339, `YYYY-MM-DD HH:MM:SS` (taken as UTC) or a bare date.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(naive.and_utc());
        }
    }
    parse_date(value).and_then(|d| d.and_hms_opt(0, 0, 0)).map(|naive| naive.and_utc())
}

/// Calendar date of a timestamp or date string.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp_strict(value).map(|dt| dt.date_naive()))
}

fn parse_timestamp_strict(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Case-insensitive substring match OR-ed across the schema's search fields.
pub fn matches_search(row: &Row, term: &str, schema: &EntitySchema) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    schema
        .search_fields
        .iter()
        .filter_map(|field| row.get(field))
        .any(|value| value.to_lowercase().contains(&term))
}

fn matches_value(row_value: &str, wanted: &str, vocabulary: Option<&Vocabulary>) -> bool {
    match vocabulary {
        Some(vocabulary) => vocabulary.to_ui(row_value) == vocabulary.to_ui(wanted),
        None => row_value.trim().eq_ignore_ascii_case(wanted.trim()),
    }
}

fn matches_date_range(row: &Row, query: &QueryState, schema: &EntitySchema) -> bool {
    let from = query.filter(DATE_FROM).and_then(parse_date);
    let to = query.filter(DATE_TO).and_then(parse_date);
    if from.is_none() && to.is_none() {
        return true;
    }
    let Some(field) = schema.date_field else {
        return true;
    };
    let Some(date) = row.get(field).and_then(parse_date) else {
        return false;
    };
    from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
}

/// True when the row passes search AND every filter AND the date range.
pub fn matches(row: &Row, query: &QueryState, schema: &EntitySchema) -> bool {
    if !matches_search(row, &query.search, schema) {
        return false;
    }
    let filters_pass = query
        .filters
        .iter()
        .filter(|(key, _)| key.as_str() != DATE_FROM && key.as_str() != DATE_TO)
        .all(|(key, wanted)| match schema.field(key) {
            Some(field) => matches_value(row.get_or_empty(key), wanted, field.vocabulary()),
            // Backend-only parameters have nothing to check locally.
            None => true,
        });
    filters_pass && matches_date_range(row, query, schema)
}

pub fn apply_filters(rows: &[Row], query: &QueryState, schema: &EntitySchema) -> Vec<Row> {
    rows.iter()
        .filter(|row| matches(row, query, schema))
        .cloned()
        .collect()
}

fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Stable sort by one field; numbers compare numerically.
pub fn sort_rows(rows: &mut [Row], sort: &SortSpec) {
    rows.sort_by(|a, b| {
        let cmp = compare_values(a.get_or_empty(&sort.field), b.get_or_empty(&sort.field));
        if sort.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::testing::{ticket, TICKETS};

    fn rows() -> Vec<Row> {
        vec![
            ticket("1", "John Carter", "pending").with("created_at", "2024-03-01T10:00:00Z"),
            ticket("2", "Johanna Lee", "in-progress")
                .with("priority", "high")
                .with("created_at", "2024-03-05T10:00:00Z"),
            ticket("3", "Maya Stone", "completed")
                .with("description", "Needs a driver for JOHN")
                .with("created_at", "2024-03-09T23:59:00Z"),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut q = QueryState::new(10);
        q.set_search("JOHN");
        assert_eq!(ids(&apply_filters(&rows(), &q, &TICKETS)), vec!["1", "3"]);

        q.set_search("3");
        assert_eq!(ids(&apply_filters(&rows(), &q, &TICKETS)), vec!["3"]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let mut q = QueryState::new(10);
        q.set_search("joh");
        q.set_filter("status", "IN_PROGRESS");
        assert_eq!(ids(&apply_filters(&rows(), &q, &TICKETS)), vec!["2"]);

        q.set_filter("priority", "low");
        assert!(apply_filters(&rows(), &q, &TICKETS).is_empty());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let mut q = QueryState::new(10);
        q.set_filter(DATE_FROM, "2024-03-05");
        q.set_filter(DATE_TO, "2024-03-09");
        assert_eq!(ids(&apply_filters(&rows(), &q, &TICKETS)), vec!["2", "3"]);

        q.clear_filter(DATE_FROM);
        assert_eq!(ids(&apply_filters(&rows(), &q, &TICKETS)), vec!["1", "2", "3"]);

        q.clear_filter(DATE_TO);
        q.set_filter(DATE_FROM, "2024-03-06");
        assert_eq!(ids(&apply_filters(&rows(), &q, &TICKETS)), vec!["3"]);
    }

    #[test]
    fn test_unknown_filter_keys_are_ignored_locally() {
        let mut q = QueryState::new(10);
        q.set_filter("agent_region", "north");
        assert_eq!(apply_filters(&rows(), &q, &TICKETS).len(), 3);
    }

    #[test]
    fn test_sort_numeric_and_text() {
        let mut list = vec![
            Row::new("a").with("price", "900"),
            Row::new("b").with("price", "1200"),
            Row::new("c").with("price", "75"),
        ];
        sort_rows(&mut list, &SortSpec::asc("price"));
        assert_eq!(ids(&list), vec!["c", "a", "b"]);

        let mut list = rows();
        sort_rows(&mut list, &SortSpec::desc("client_name"));
        assert_eq!(ids(&list), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_timestamp_formats() {
        assert!(parse_timestamp("2024-03-05T10:00:00Z").is_some());
        assert!(parse_timestamp("2024-03-05 10:00:00").is_some());
        assert!(parse_timestamp("2024-03-05").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert_eq!(
            parse_date("2024-03-05T23:00:00+02:00"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
    }
}
