use crate::shared::components::CardTone;
use crate::shared::http::GlooTransport;
use crate::shared::list_page::{Column, ListLayout, ListPage, ListPageSpec, StatCardSpec};
use contracts::domain::a006_partner::SCHEMA;
use contracts::shared::list_view::{DataSource, RestSource};
use leptos::prelude::*;
use std::rc::Rc;

const COLUMNS: &[Column] = &[
    Column::text("company").sortable(),
    Column::text("contact"),
    Column::text("email"),
    Column::text("license"),
    Column::badge("partner_type").sortable(),
    Column::badge("verification").sortable(),
    Column::date("submitted_at").sortable(),
];

const CARDS: &[StatCardSpec] = &[
    StatCardSpec {
        label_key: "partners.stats.pending",
        stats: &["verification.pending"],
        icon: "clock",
        tone: CardTone::Warning,
    },
    StatCardSpec {
        label_key: "partners.stats.verified",
        stats: &["verification.verified"],
        icon: "check-circle",
        tone: CardTone::Success,
    },
    StatCardSpec {
        label_key: "partners.stats.rejected",
        stats: &["verification.rejected"],
        icon: "ban",
        tone: CardTone::Error,
    },
];

fn source() -> Rc<dyn DataSource> {
    Rc::new(RestSource::new(GlooTransport, &SCHEMA))
}

/// Partner verification queue.
pub static PARTNERS_LIST: ListPageSpec = ListPageSpec {
    title_key: "partners.title",
    subtitle_key: "partners.subtitle",
    icon: "handshake",
    schema: &SCHEMA,
    columns: COLUMNS,
    filters: &["verification", "partner_type"],
    date_range: true,
    cards: CARDS,
    layout: ListLayout::Table,
    source,
    detail: None,
};

#[component]
pub fn PartnersList() -> impl IntoView {
    view! { <ListPage spec=PARTNERS_LIST /> }
}
