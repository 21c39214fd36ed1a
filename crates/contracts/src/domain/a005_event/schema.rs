use crate::shared::list_view::{
    EntitySchema, FieldSpec, FilterMode, RowAction, StatsScope, Vocabulary,
};
use crate::shared::validation::ValidationRules;

// ============================================================================
// Vocabularies
// ============================================================================

pub const EVENT_STATUS: Vocabulary = Vocabulary::new(
    "event",
    &[
        ("draft", "DRAFT"),
        ("pending", "PENDING_APPROVAL"),
        ("published", "PUBLISHED"),
        ("cancelled", "CANCELLED"),
        ("completed", "COMPLETED"),
    ],
);

const REGISTRATION_STATUS: Vocabulary = Vocabulary::new(
    "registration",
    &[
        ("registered", "REGISTERED"),
        ("attended", "ATTENDED"),
        ("cancelled", "CANCELLED"),
    ],
);

// ============================================================================
// Events
// ============================================================================

static FIELDS: [FieldSpec; 8] = [
    FieldSpec::text("title", &["title", "name"])
        .editable()
        .with_rules(ValidationRules::required().with_length(3, 120)),
    FieldSpec::text("location", &["location.name", "location", "venue"])
        .editable()
        .with_rules(ValidationRules::required()),
    FieldSpec::timestamp("start_date", &["startDate", "start_date", "date"])
        .editable()
        .with_rules(ValidationRules::required()),
    FieldSpec::number("capacity", &["capacity", "maxAttendees", "max_attendees"])
        .editable()
        .with_rules(ValidationRules::required().with_range(1.0, 10000.0)),
    FieldSpec::number(
        "registrations",
        &["registrationsCount", "registrations_count", "attendeeCount"],
    ),
    FieldSpec::text("sponsor", &["sponsor.name", "sponsorName", "sponsor_name"]),
    FieldSpec::enumerated("status", &["status"], &EVENT_STATUS).with_default("draft"),
    FieldSpec::timestamp("created_at", &["createdAt", "created_at"]),
];

/// Event management for admins and sponsors. Admins publish (approve) or
/// cancel (reject) pending events; finished ones are closed.
pub static SCHEMA: EntitySchema = EntitySchema {
    name: "events",
    endpoint: "/events",
    resource: "/events",
    id_aliases: &["id", "_id", "eventId"],
    fields: &FIELDS,
    search_fields: &["title", "location", "sponsor", "id"],
    search_param: "q",
    collection_keys: &["events"],
    date_field: Some("start_date"),
    created_field: Some("created_at"),
    status_field: Some("status"),
    assign_field: None,
    transitions: &[
        (RowAction::Approve, "published"),
        (RowAction::Reject, "cancelled"),
        (RowAction::Close, "completed"),
    ],
    actions: &[
        RowAction::View,
        RowAction::Edit,
        RowAction::Approve,
        RowAction::Reject,
        RowAction::Close,
        RowAction::Delete,
    ],
    filter_mode: FilterMode::Server,
    stats_scope: StatsScope::LoadedSet,
    label: "Event",
};

// ============================================================================
// Registrations (`/events/:id/registrations`)
// ============================================================================

pub const REGISTRATIONS_SEGMENT: &str = "registrations";

static REGISTRATION_FIELDS: [FieldSpec; 4] = [
    FieldSpec::text("name", &["user.name", "attendeeName", "name"]),
    FieldSpec::text("email", &["user.email", "attendeeEmail", "email"]),
    FieldSpec::enumerated("status", &["status"], &REGISTRATION_STATUS)
        .with_default("registered"),
    FieldSpec::timestamp("registered_at", &["registeredAt", "registered_at", "createdAt"]),
];

pub static REGISTRATIONS: EntitySchema = EntitySchema {
    name: "registrations",
    endpoint: "/events",
    resource: "/events",
    id_aliases: &["id", "_id", "registrationId"],
    fields: &REGISTRATION_FIELDS,
    search_fields: &["name", "email"],
    search_param: "q",
    collection_keys: &["registrations", "attendees"],
    date_field: Some("registered_at"),
    created_field: Some("registered_at"),
    status_field: Some("status"),
    assign_field: None,
    transitions: &[],
    actions: &[RowAction::View],
    filter_mode: FilterMode::Client,
    stats_scope: StatsScope::LoadedSet,
    label: "Registration",
};
