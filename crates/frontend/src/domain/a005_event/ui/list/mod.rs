use super::registrations::registrations_detail;
use crate::shared::components::CardTone;
use crate::shared::http::GlooTransport;
use crate::shared::list_page::{Column, ListLayout, ListPage, ListPageSpec, StatCardSpec};
use contracts::domain::a005_event::SCHEMA;
use contracts::shared::list_view::{DataSource, RestSource};
use leptos::prelude::*;
use std::rc::Rc;

const COLUMNS: &[Column] = &[
    Column::text("title").sortable(),
    Column::text("location"),
    Column::date("start_date").sortable(),
    Column::number("capacity").sortable(),
    Column::number("registrations"),
    Column::text("sponsor"),
    Column::badge("status").sortable(),
];

const CARDS: &[StatCardSpec] = &[
    StatCardSpec {
        label_key: "events.stats.total",
        stats: &["total"],
        icon: "calendar",
        tone: CardTone::Neutral,
    },
    StatCardSpec {
        label_key: "events.stats.pending",
        stats: &["status.pending"],
        icon: "clock",
        tone: CardTone::Warning,
    },
    StatCardSpec {
        label_key: "events.stats.published",
        stats: &["status.published"],
        icon: "globe",
        tone: CardTone::Success,
    },
    StatCardSpec {
        label_key: "events.stats.cancelled",
        stats: &["status.cancelled"],
        icon: "x-circle",
        tone: CardTone::Error,
    },
];

fn source() -> Rc<dyn DataSource> {
    Rc::new(RestSource::new(GlooTransport, &SCHEMA))
}

/// Event moderation (admin) and the sponsor's own events.
pub static EVENTS_LIST: ListPageSpec = ListPageSpec {
    title_key: "events.title",
    subtitle_key: "events.subtitle",
    icon: "calendar",
    schema: &SCHEMA,
    columns: COLUMNS,
    filters: &["status"],
    date_range: true,
    cards: CARDS,
    layout: ListLayout::Table,
    source,
    detail: Some(registrations_detail),
};

#[component]
pub fn EventsList() -> impl IntoView {
    view! { <ListPage spec=EVENTS_LIST /> }
}
