//! Unwrapping of the response envelopes the backend uses.

use super::stats::Stats;
use serde_json::Value;

/// Unwrap rules, tried in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeRule {
    /// `{ data: { items: [...], pagination } }`
    DataItems,
    /// `{ items: [...] }`
    Items,
    /// `{ data: [...] }`
    DataArray,
    /// `[...]`
    Bare,
    /// `{ <key>: [...] }` or `{ data: { <key>: [...] } }`
    Key(&'static str),
}

pub const STANDARD_RULES: [EnvelopeRule; 4] = [
    EnvelopeRule::DataItems,
    EnvelopeRule::Items,
    EnvelopeRule::DataArray,
    EnvelopeRule::Bare,
];

const TOTAL_KEYS: [&str; 5] = ["total", "totalItems", "total_items", "totalCount", "count"];

impl EnvelopeRule {
    pub fn apply<'a>(&self, body: &'a Value) -> Option<&'a Vec<Value>> {
        match self {
            EnvelopeRule::DataItems => body.get("data")?.get("items")?.as_array(),
            EnvelopeRule::Items => body.get("items")?.as_array(),
            EnvelopeRule::DataArray => body.get("data")?.as_array(),
            EnvelopeRule::Bare => body.as_array(),
            EnvelopeRule::Key(key) => body
                .get(*key)
                .and_then(Value::as_array)
                .or_else(|| body.get("data")?.get(*key)?.as_array()),
        }
    }
}

/// The item sequence plus whatever pagination metadata came with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Unwrapped<'a> {
    pub items: &'a [Value],
    pub rule: EnvelopeRule,
    pub total_items: Option<usize>,
}

/// First rule yielding a sequence wins.
pub fn unwrap_items<'a>(body: &'a Value, extra_keys: &[&'static str]) -> Option<Unwrapped<'a>> {
    let extra = extra_keys.iter().copied().map(EnvelopeRule::Key);
    STANDARD_RULES.into_iter().chain(extra).find_map(|rule| {
        rule.apply(body).map(|items| Unwrapped {
            items: items.as_slice(),
            rule,
            total_items: pagination_total(body),
        })
    })
}

/// Total item count from `data.pagination`, `pagination`, `meta` or `data.meta`.
pub fn pagination_total(body: &Value) -> Option<usize> {
    let candidates = [
        body.get("data").and_then(|d| d.get("pagination")),
        body.get("pagination"),
        body.get("meta"),
        body.get("data").and_then(|d| d.get("meta")),
    ];
    candidates.into_iter().flatten().find_map(|meta| {
        TOTAL_KEYS
            .iter()
            .find_map(|key| meta.get(*key).and_then(as_count))
    })
}

fn as_count(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().map(|n| n as usize),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Single-object responses: `{ data: {...} }` or the object itself.
pub fn unwrap_object(body: &Value) -> &Value {
    match body.get("data") {
        Some(data) if data.is_object() => data,
        _ => body,
    }
}

/// Stats endpoint body -> label counts.
///
/// Numeric leaves of the (unwrapped) object are taken, one nesting level deep
/// with dotted labels: `{ byStatus: { active: 3 } }` -> `byStatus.active`.
pub fn unwrap_stats(body: &Value) -> Stats {
    let mut stats = Stats::default();
    if let Some(object) = unwrap_object(body).as_object() {
        for (key, value) in object {
            if let Some(count) = as_count(value) {
                stats.insert(key.clone(), count);
            } else if let Some(nested) = value.as_object() {
                for (inner, value) in nested {
                    if let Some(count) = as_count(value) {
                        stats.insert(format!("{}.{}", key, inner), count);
                    }
                }
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_each_envelope_shape() {
        let body = json!({ "data": { "items": [{ "id": 1 }], "pagination": { "total": 31 } } });
        let got = unwrap_items(&body, &[]).unwrap();
        assert_eq!(got.rule, EnvelopeRule::DataItems);
        assert_eq!(got.items.len(), 1);
        assert_eq!(got.total_items, Some(31));

        let body = json!({ "items": [{ "id": 1 }, { "id": 2 }] });
        let got = unwrap_items(&body, &[]).unwrap();
        assert_eq!(got.rule, EnvelopeRule::Items);
        assert_eq!(got.total_items, None);

        let body = json!({ "data": [{ "id": 1 }], "meta": { "totalCount": "12" } });
        let got = unwrap_items(&body, &[]).unwrap();
        assert_eq!(got.rule, EnvelopeRule::DataArray);
        assert_eq!(got.total_items, Some(12));

        let body = json!([{ "id": 1 }]);
        assert_eq!(unwrap_items(&body, &[]).unwrap().rule, EnvelopeRule::Bare);
    }

    #[test]
    fn test_priority_order() {
        // `items` is checked before `data` when both are sequences.
        let body = json!({ "items": [1, 2, 3], "data": [1] });
        assert_eq!(unwrap_items(&body, &[]).unwrap().items.len(), 3);

        // A non-sequence `data.items` does not stop the search.
        let body = json!({ "data": { "items": null }, "items": [1] });
        assert_eq!(unwrap_items(&body, &[]).unwrap().rule, EnvelopeRule::Items);
    }

    #[test]
    fn test_resource_specific_keys() {
        let body = json!({ "data": { "requests": [{ "id": 1 }] } });
        assert!(unwrap_items(&body, &[]).is_none());
        let got = unwrap_items(&body, &["requests"]).unwrap();
        assert_eq!(got.rule, EnvelopeRule::Key("requests"));
    }

    #[test]
    fn test_stats_body() {
        let body = json!({
            "data": { "total": 40, "active": 31, "byRole": { "admin": 2, "client": 30 }, "label": "x" }
        });
        let stats = unwrap_stats(&body);
        assert_eq!(stats.get("total"), 40);
        assert_eq!(stats.get("byRole.client"), 30);
        assert_eq!(stats.get("label"), 0);
    }

    #[test]
    fn test_unwrap_object() {
        let body = json!({ "success": true, "data": { "id": 7 } });
        assert_eq!(unwrap_object(&body), &json!({ "id": 7 }));
        let body = json!({ "id": 7 });
        assert_eq!(unwrap_object(&body), &body);
    }
}
