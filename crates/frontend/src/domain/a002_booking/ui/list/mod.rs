use crate::shared::components::CardTone;
use crate::shared::http::GlooTransport;
use crate::shared::list_page::{Column, ListLayout, ListPage, ListPageSpec, StatCardSpec};
use contracts::domain::a002_booking::SCHEMA;
use contracts::shared::list_view::{DataSource, RestSource};
use leptos::prelude::*;
use std::rc::Rc;

const COLUMNS: &[Column] = &[
    Column::text("property").sortable(),
    Column::text("location"),
    Column::date("check_in").sortable(),
    Column::date("check_out").sortable(),
    Column::number("guests"),
    Column::money("total_price").sortable(),
    Column::badge("status").sortable(),
];

const CARDS: &[StatCardSpec] = &[
    StatCardSpec {
        label_key: "bookings.stats.total",
        stats: &["total"],
        icon: "bookmark",
        tone: CardTone::Neutral,
    },
    StatCardSpec {
        label_key: "bookings.stats.confirmed",
        stats: &["status.confirmed"],
        icon: "check-circle",
        tone: CardTone::Success,
    },
    StatCardSpec {
        label_key: "bookings.stats.pending",
        stats: &["status.pending"],
        icon: "clock",
        tone: CardTone::Warning,
    },
    StatCardSpec {
        label_key: "bookings.stats.cancelled",
        stats: &["status.cancelled"],
        icon: "x-circle",
        tone: CardTone::Error,
    },
];

fn source() -> Rc<dyn DataSource> {
    Rc::new(RestSource::new(GlooTransport, &SCHEMA))
}

/// The client's own bookings.
pub static BOOKINGS_LIST: ListPageSpec = ListPageSpec {
    title_key: "bookings.title",
    subtitle_key: "bookings.subtitle",
    icon: "bookmark",
    schema: &SCHEMA,
    columns: COLUMNS,
    filters: &["status"],
    date_range: true,
    cards: CARDS,
    layout: ListLayout::Table,
    source,
    detail: None,
};

#[component]
pub fn BookingsList() -> impl IntoView {
    view! { <ListPage spec=BOOKINGS_LIST /> }
}
