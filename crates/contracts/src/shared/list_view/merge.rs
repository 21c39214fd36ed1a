use super::envelope::unwrap_object;
use super::normalize::normalize_partial;
use super::row::Row;
use super::schema::EntitySchema;
use serde_json::Value;

/// Row to display after a successful mutation.
///
/// Starts from the submitted values and overlays whatever fields the server
/// echoed back, so a response carrying only `{ id, status }` does not blank
/// out the rest of the row.
pub fn merge_confirmed(submitted: &Row, response: Option<&Value>, schema: &EntitySchema) -> Row {
    let Some(body) = response else {
        return submitted.clone();
    };

    let partial = normalize_partial(unwrap_object(body), schema);
    if let Some(id) = &partial.id {
        if id != &submitted.id {
            log::warn!(
                "{}: response for {} carried id {}, keeping submitted values",
                schema.name,
                submitted.id,
                id
            );
            return submitted.clone();
        }
    }

    let mut merged = submitted.clone();
    for (field, value) in partial.fields {
        merged.set(field, value);
    }
    merged
}
