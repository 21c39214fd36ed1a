use crate::shared::list_view::{
    EntitySchema, FieldSpec, FilterMode, RowAction, StatsScope, Vocabulary,
};

pub const INQUIRY_STATUS: Vocabulary = Vocabulary::new(
    "inquiry",
    &[
        ("new", "NEW"),
        ("responded", "RESPONDED"),
        ("closed", "CLOSED"),
    ],
);

static FIELDS: [FieldSpec; 6] = [
    FieldSpec::text("subject", &["subject", "title"]),
    FieldSpec::text("property", &["property.title", "propertyTitle", "property_title"]),
    FieldSpec::text("message", &["message", "body", "description"]),
    FieldSpec::text("response", &["response.message", "response", "reply"]),
    FieldSpec::enumerated("status", &["status"], &INQUIRY_STATUS).with_default("new"),
    FieldSpec::timestamp("created_at", &["createdAt", "created_at", "sentAt"]),
];

/// Inquiries the signed-in client has sent about properties.
pub static SCHEMA: EntitySchema = EntitySchema {
    name: "inquiries",
    endpoint: "/inquiries/my-inquiries",
    resource: "/inquiries",
    id_aliases: &["id", "_id", "inquiryId"],
    fields: &FIELDS,
    search_fields: &["subject", "property", "message", "id"],
    search_param: "search",
    collection_keys: &["inquiries"],
    date_field: Some("created_at"),
    created_field: Some("created_at"),
    status_field: Some("status"),
    assign_field: None,
    transitions: &[(RowAction::Close, "closed")],
    actions: &[RowAction::View, RowAction::Close, RowAction::Delete],
    filter_mode: FilterMode::Client,
    stats_scope: StatsScope::LoadedSet,
    label: "Inquiry",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::normalize::normalize_row;
    use serde_json::json;

    #[test]
    fn test_nested_response_message() {
        let raw = json!({
            "id": 12,
            "title": "Viewing request",
            "response": { "message": "Saturday works" },
            "status": "responded"
        });
        let row = normalize_row(&raw, &SCHEMA).unwrap();
        assert_eq!(row.get("subject"), Some("Viewing request"));
        assert_eq!(row.get("response"), Some("Saturday works"));
        assert_eq!(row.get("status"), Some("responded"));
    }
}
