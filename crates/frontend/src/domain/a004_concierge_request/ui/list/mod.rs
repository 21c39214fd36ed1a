use crate::shared::components::CardTone;
use crate::shared::http::GlooTransport;
use crate::shared::list_page::{Column, ListLayout, ListPage, ListPageSpec, StatCardSpec};
use contracts::domain::a004_concierge_request::SCHEMA;
use contracts::shared::list_view::{DataSource, RestSource};
use leptos::prelude::*;
use std::rc::Rc;

const COLUMNS: &[Column] = &[
    Column::text("id").sortable(),
    Column::text("client_name").sortable(),
    Column::badge("service_type").sortable(),
    Column::badge("priority").sortable(),
    Column::badge("status").sortable(),
    Column::text("assigned_to"),
    Column::date("created_at").sortable(),
];

// Counts cover the current page only.
const CARDS: &[StatCardSpec] = &[
    StatCardSpec {
        label_key: "tickets.stats.pending",
        stats: &["status.pending"],
        icon: "clock",
        tone: CardTone::Warning,
    },
    StatCardSpec {
        label_key: "tickets.stats.in_progress",
        stats: &["status.in-progress"],
        icon: "refresh",
        tone: CardTone::Neutral,
    },
    StatCardSpec {
        label_key: "tickets.stats.completed",
        stats: &["status.completed"],
        icon: "check-circle",
        tone: CardTone::Success,
    },
    StatCardSpec {
        label_key: "tickets.stats.urgent",
        stats: &["priority.urgent"],
        icon: "alert-circle",
        tone: CardTone::Error,
    },
];

fn source() -> Rc<dyn DataSource> {
    Rc::new(RestSource::new(GlooTransport, &SCHEMA))
}

/// Concierge service tickets.
pub static TICKETS_LIST: ListPageSpec = ListPageSpec {
    title_key: "tickets.title",
    subtitle_key: "tickets.subtitle",
    icon: "ticket",
    schema: &SCHEMA,
    columns: COLUMNS,
    filters: &["status", "priority", "service_type"],
    date_range: true,
    cards: CARDS,
    layout: ListLayout::Table,
    source,
    detail: None,
};

#[component]
pub fn TicketsList() -> impl IntoView {
    view! { <ListPage spec=TICKETS_LIST /> }
}
