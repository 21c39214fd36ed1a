use crate::shared::list_view::{
    EntitySchema, FieldSpec, FilterMode, RowAction, StatsScope, Vocabulary,
};
use crate::shared::validation::ValidationRules;

// ============================================================================
// Vocabularies
// ============================================================================

pub const TICKET_STATUS: Vocabulary = Vocabulary::new(
    "ticket",
    &[
        ("pending", "PENDING"),
        ("in-progress", "IN_PROGRESS"),
        ("completed", "COMPLETED"),
        ("cancelled", "CANCELLED"),
    ],
);

pub const PRIORITY: Vocabulary = Vocabulary::new(
    "priority",
    &[
        ("low", "LOW"),
        ("medium", "MEDIUM"),
        ("high", "HIGH"),
        ("urgent", "URGENT"),
    ],
);

pub const SERVICE_TYPE: Vocabulary = Vocabulary::new(
    "service",
    &[
        ("airport-transfer", "AIRPORT_TRANSFER"),
        ("property-viewing", "PROPERTY_VIEWING"),
        ("interior-design", "INTERIOR_DESIGN"),
        ("moving", "MOVING"),
        ("cleaning", "CLEANING"),
        ("legal", "LEGAL_ASSISTANCE"),
    ],
);

// ============================================================================
// Schema
// ============================================================================

static FIELDS: [FieldSpec; 11] = [
    FieldSpec::text("client_name", &["clientName", "client_name", "name", "user.name"])
        .editable()
        .with_rules(ValidationRules::required().with_length(2, 80)),
    FieldSpec::text("email", &["email", "clientEmail", "client_email", "user.email"])
        .editable()
        .with_rules(ValidationRules::required().with_email()),
    FieldSpec::text("phone", &["phone", "clientPhone", "client_phone", "phoneNumber"])
        .editable()
        .with_rules(ValidationRules::required().with_length(6, 20)),
    FieldSpec::enumerated("service_type", &["serviceType", "service_type", "service"], &SERVICE_TYPE)
        .with_rules(ValidationRules::required().with_error("Please choose a service")),
    FieldSpec::text("property", &["property.title", "propertyTitle", "property_title"]),
    FieldSpec::text("description", &["description", "details", "notes"])
        .editable()
        .with_rules(ValidationRules::none().with_length(0, 1000)),
    FieldSpec::enumerated("status", &["status"], &TICKET_STATUS)
        .editable()
        .with_default("pending"),
    FieldSpec::enumerated("priority", &["priority"], &PRIORITY)
        .editable()
        .with_default("medium"),
    FieldSpec::text("assigned_to", &["assignedTo.name", "assignedTo", "assigned_to", "assignee"]),
    FieldSpec::timestamp("preferred_date", &["preferredDate", "preferred_date", "date"])
        .with_rules(ValidationRules::required()),
    FieldSpec::timestamp("created_at", &["createdAt", "created_at"]),
];

/// Concierge tickets. The backend filters and pages, the page re-checks its
/// predicates and the cards summarize the rows on screen.
pub static SCHEMA: EntitySchema = EntitySchema {
    name: "tickets",
    endpoint: "/concierge/requests",
    resource: "/concierge/requests",
    id_aliases: &["id", "_id", "requestId", "ticketNumber"],
    fields: &FIELDS,
    search_fields: &["client_name", "email", "phone", "id", "description"],
    search_param: "search",
    collection_keys: &["requests", "tickets"],
    date_field: Some("created_at"),
    created_field: Some("created_at"),
    status_field: Some("status"),
    assign_field: Some("assigned_to"),
    transitions: &[(RowAction::Close, "completed")],
    actions: &[
        RowAction::View,
        RowAction::Edit,
        RowAction::Assign,
        RowAction::Close,
        RowAction::Delete,
    ],
    filter_mode: FilterMode::ServerVerified,
    stats_scope: StatsScope::CurrentPage,
    label: "Ticket",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::normalize::normalize_row;
    use serde_json::json;

    #[test]
    fn test_assignee_object_or_string() {
        let raw = json!({ "id": 1, "assignedTo": { "name": "Nora" }, "status": "in_progress" });
        let row = normalize_row(&raw, &SCHEMA).unwrap();
        assert_eq!(row.get("assigned_to"), Some("Nora"));
        assert_eq!(row.get("status"), Some("in-progress"));
        assert_eq!(row.get("priority"), Some("medium"));

        let raw = json!({ "id": 2, "assigned_to": "Omar", "priority": "URGENT" });
        let row = normalize_row(&raw, &SCHEMA).unwrap();
        assert_eq!(row.get("assigned_to"), Some("Omar"));
        assert_eq!(row.get("priority"), Some("urgent"));
    }

    #[test]
    fn test_assign_writes_flat_name() {
        let field = SCHEMA.field("assigned_to").unwrap();
        assert_eq!(field.wire_name(), "assignedTo");
    }
}
