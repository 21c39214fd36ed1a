//! Shared fixtures for list-view unit tests.

use super::dispatcher::RowAction;
use super::notify::{Notifier, Toast};
use super::row::Row;
use super::schema::{EntitySchema, FieldSpec, FilterMode, StatsScope};
use super::status::Vocabulary;
use crate::shared::validation::ValidationRules;
use std::cell::RefCell;

pub const TICKET_STATUS: Vocabulary = Vocabulary::new(
    "ticket",
    &[
        ("pending", "PENDING"),
        ("in-progress", "IN_PROGRESS"),
        ("completed", "COMPLETED"),
    ],
);

pub const PRIORITY: Vocabulary = Vocabulary::new(
    "priority",
    &[("low", "LOW"), ("medium", "MEDIUM"), ("high", "HIGH")],
);

static FIELDS: [FieldSpec; 8] = [
    FieldSpec::text("client_name", &["clientName", "client_name", "name"])
        .editable()
        .with_rules(ValidationRules::required()),
    FieldSpec::text("email", &["email", "clientEmail"])
        .editable()
        .with_rules(ValidationRules::none().with_email()),
    FieldSpec::text("property", &["propertyTitle", "property.title"]),
    FieldSpec::text("description", &["description", "details"]),
    FieldSpec::enumerated("status", &["status"], &TICKET_STATUS).editable(),
    FieldSpec::enumerated("priority", &["priority"], &PRIORITY).editable(),
    FieldSpec::text("assigned_to", &["assignedTo", "assigned_to"]),
    FieldSpec::timestamp("created_at", &["createdAt", "created_at"]),
];

/// One ticket resource per filter mode and stats scope.
macro_rules! ticket_schema {
    ($name:ident, $filter_mode:expr, $stats_scope:expr) => {
        pub static $name: EntitySchema = EntitySchema {
            name: "tickets",
            endpoint: "/concierge/requests",
            resource: "/concierge/requests",
            id_aliases: &["id", "_id"],
            fields: &FIELDS,
            search_fields: &["client_name", "email", "id", "description"],
            search_param: "search",
            collection_keys: &["requests"],
            date_field: Some("created_at"),
            created_field: Some("created_at"),
            status_field: Some("status"),
            assign_field: Some("assigned_to"),
            transitions: &[(RowAction::Close, "completed")],
            actions: &[
                RowAction::View,
                RowAction::Edit,
                RowAction::Delete,
                RowAction::Assign,
                RowAction::Close,
            ],
            filter_mode: $filter_mode,
            stats_scope: $stats_scope,
            label: "Ticket",
        };
    };
}

ticket_schema!(TICKETS, FilterMode::ServerVerified, StatsScope::CurrentPage);
ticket_schema!(LOCAL_TICKETS, FilterMode::Client, StatsScope::LoadedSet);
ticket_schema!(
    SERVER_TICKETS,
    FilterMode::Server,
    StatsScope::Endpoint("/concierge/requests/stats")
);

pub fn ticket(id: &str, name: &str, status: &str) -> Row {
    Row::new(id)
        .with("client_name", name)
        .with("email", format!("{}@example.com", name.to_lowercase()))
        .with("status", status)
        .with("priority", "medium")
        .with("created_at", "2024-03-10T09:00:00Z")
}

/// Notifier that records every toast.
#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: RefCell<Vec<Toast>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}
