use super::row::Row;
use super::schema::EntitySchema;
use serde_json::Value;
use std::collections::BTreeMap;

/// Looks up a dotted path (`property.title`) in a JSON object.
pub fn lookup<'a>(raw: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(raw, |current, segment| current.get(segment))
}

/// Scalar -> display string. Null, blank strings and containers yield `None`
/// so the next alias in the chain gets its turn.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First alias that resolves to a display value.
pub fn resolve(raw: &Value, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|alias| lookup(raw, alias).and_then(display_value))
}

/// Normalize one raw backend item. Items without a resolvable id yield `None`.
pub fn normalize_row(raw: &Value, schema: &EntitySchema) -> Option<Row> {
    let id = resolve(raw, schema.id_aliases)?;
    let fields = schema
        .fields
        .iter()
        .map(|field| {
            let value = resolve(raw, field.aliases)
                .map(|v| field.kind.normalize(&v))
                .unwrap_or_else(|| field.default.to_string());
            (field.name.to_string(), value)
        })
        .collect();
    Some(Row { id, fields })
}

/// Normalize a batch, dropping (and logging) items with no id.
pub fn normalize_all(items: &[Value], schema: &EntitySchema) -> Vec<Row> {
    let rows: Vec<Row> = items
        .iter()
        .filter_map(|item| normalize_row(item, schema))
        .collect();
    if rows.len() < items.len() {
        log::warn!(
            "{}: dropped {} item(s) without an id",
            schema.name,
            items.len() - rows.len()
        );
    }
    rows
}

/// Fields actually present in a (possibly incomplete) server response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRow {
    pub id: Option<String>,
    pub fields: BTreeMap<String, String>,
}

/// Like [`normalize_row`] but without defaults: absent fields stay absent.
pub fn normalize_partial(raw: &Value, schema: &EntitySchema) -> PartialRow {
    let id = resolve(raw, schema.id_aliases);
    let fields = schema
        .fields
        .iter()
        .filter_map(|field| {
            resolve(raw, field.aliases)
                .map(|v| (field.name.to_string(), field.kind.normalize(&v)))
        })
        .collect();
    PartialRow { id, fields }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::testing::TICKETS;
    use serde_json::json;

    #[test]
    fn test_secondary_alias_is_used_when_primary_missing() {
        let row = normalize_row(&json!({ "id": 1, "client_name": "Sara" }), &TICKETS).unwrap();
        assert_eq!(row.get("client_name"), Some("Sara"));

        let row = normalize_row(&json!({ "id": 2, "name": "Omar" }), &TICKETS).unwrap();
        assert_eq!(row.get("client_name"), Some("Omar"));
    }

    #[test]
    fn test_primary_alias_wins_and_blank_values_fall_through() {
        let raw = json!({ "_id": "a1", "clientName": "", "client_name": "Lina", "name": "x" });
        let row = normalize_row(&raw, &TICKETS).unwrap();
        assert_eq!(row.id, "a1");
        assert_eq!(row.get("client_name"), Some("Lina"));
    }

    #[test]
    fn test_nested_paths_defaults_and_enums() {
        let raw = json!({
            "id": 9,
            "property": { "title": "Palm Villa" },
            "status": "IN_PROGRESS"
        });
        let row = normalize_row(&raw, &TICKETS).unwrap();
        assert_eq!(row.get("property"), Some("Palm Villa"));
        assert_eq!(row.get("status"), Some("in-progress"));
        assert_eq!(row.get("assigned_to"), Some(""));
    }

    #[test]
    fn test_items_without_id_are_dropped() {
        let items = vec![json!({ "name": "ghost" }), json!({ "id": 3, "name": "Ali" })];
        let rows = normalize_all(&items, &TICKETS);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "3");
    }

    #[test]
    fn test_partial_keeps_only_present_fields() {
        let partial = normalize_partial(&json!({ "id": 7, "status": "COMPLETED" }), &TICKETS);
        assert_eq!(partial.id.as_deref(), Some("7"));
        assert_eq!(partial.fields.len(), 1);
        assert_eq!(partial.fields.get("status").map(String::as_str), Some("completed"));
    }
}
