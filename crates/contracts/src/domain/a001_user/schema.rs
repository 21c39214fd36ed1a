use crate::shared::list_view::{
    EntitySchema, FieldSpec, FilterMode, RowAction, StatsScope, Vocabulary,
};
use crate::shared::validation::ValidationRules;

// ============================================================================
// Vocabularies
// ============================================================================

pub const USER_ROLE: Vocabulary = Vocabulary::new(
    "role",
    &[
        ("admin", "ADMIN"),
        ("client", "CLIENT"),
        ("partner", "PARTNER"),
        ("concierge", "CONCIERGE"),
        ("sponsor", "SPONSOR"),
    ],
);

pub const USER_STATUS: Vocabulary = Vocabulary::new(
    "user",
    &[
        ("active", "ACTIVE"),
        ("inactive", "INACTIVE"),
        ("suspended", "SUSPENDED"),
        ("pending", "PENDING_VERIFICATION"),
    ],
);

// ============================================================================
// Schema
// ============================================================================

static FIELDS: [FieldSpec; 7] = [
    FieldSpec::text("name", &["fullName", "full_name", "name", "username"])
        .editable()
        .with_rules(ValidationRules::required().with_length(2, 80)),
    FieldSpec::text("email", &["email", "emailAddress"])
        .editable()
        .with_rules(ValidationRules::required().with_email()),
    FieldSpec::text("phone", &["phone", "phoneNumber", "phone_number"])
        .editable()
        .with_rules(ValidationRules::none().with_length(6, 20)),
    FieldSpec::enumerated("role", &["role", "userRole", "user_role"], &USER_ROLE)
        .editable()
        .with_rules(ValidationRules::required()),
    FieldSpec::enumerated("status", &["status", "accountStatus"], &USER_STATUS)
        .editable()
        .with_default("active"),
    FieldSpec::timestamp("created_at", &["createdAt", "created_at", "joinedAt"]),
    FieldSpec::timestamp("last_login", &["lastLogin", "last_login", "lastLoginAt"]),
];

/// Admin user management. Totals come from `/users/stats` so the cards show
/// the whole user base, not just the current page.
pub static SCHEMA: EntitySchema = EntitySchema {
    name: "users",
    endpoint: "/users",
    resource: "/users",
    id_aliases: &["id", "_id", "userId"],
    fields: &FIELDS,
    search_fields: &["name", "email", "phone", "id"],
    search_param: "search",
    collection_keys: &["users"],
    date_field: Some("created_at"),
    created_field: Some("created_at"),
    status_field: Some("status"),
    assign_field: None,
    transitions: &[],
    actions: &[RowAction::View, RowAction::Edit, RowAction::Delete],
    filter_mode: FilterMode::Server,
    stats_scope: StatsScope::Endpoint("/users/stats"),
    label: "User",
};
