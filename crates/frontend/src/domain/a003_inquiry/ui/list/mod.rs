use crate::shared::components::CardTone;
use crate::shared::http::GlooTransport;
use crate::shared::list_page::{Column, ListLayout, ListPage, ListPageSpec, StatCardSpec};
use contracts::domain::a003_inquiry::SCHEMA;
use contracts::shared::list_view::{DataSource, RestSource};
use leptos::prelude::*;
use std::rc::Rc;

const COLUMNS: &[Column] = &[
    Column::text("subject").sortable(),
    Column::text("property").sortable(),
    Column::text("message"),
    Column::badge("status").sortable(),
    Column::date("created_at").sortable(),
];

const CARDS: &[StatCardSpec] = &[
    StatCardSpec {
        label_key: "inquiries.stats.total",
        stats: &["total"],
        icon: "message-square",
        tone: CardTone::Neutral,
    },
    StatCardSpec {
        label_key: "inquiries.stats.new",
        stats: &["status.new"],
        icon: "inbox",
        tone: CardTone::Warning,
    },
    StatCardSpec {
        label_key: "inquiries.stats.responded",
        stats: &["status.responded"],
        icon: "check-circle",
        tone: CardTone::Success,
    },
    StatCardSpec {
        label_key: "inquiries.stats.recent",
        stats: &["last_24h"],
        icon: "clock",
        tone: CardTone::Neutral,
    },
];

fn source() -> Rc<dyn DataSource> {
    Rc::new(RestSource::new(GlooTransport, &SCHEMA))
}

/// Property inquiries, sent (client) or received (partner).
pub static INQUIRIES_LIST: ListPageSpec = ListPageSpec {
    title_key: "inquiries.title",
    subtitle_key: "inquiries.subtitle",
    icon: "message-square",
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
pub fn InquiriesList() -> impl IntoView {
    view! { <ListPage spec=INQUIRIES_LIST /> }
}
