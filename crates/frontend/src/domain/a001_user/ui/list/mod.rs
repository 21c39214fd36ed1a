use crate::shared::components::CardTone;
use crate::shared::http::GlooTransport;
use crate::shared::list_page::{Column, ListLayout, ListPage, ListPageSpec, StatCardSpec};
use contracts::domain::a001_user::SCHEMA;
use contracts::shared::list_view::{DataSource, RestSource};
use leptos::prelude::*;
use std::rc::Rc;

const COLUMNS: &[Column] = &[
    Column::text("name").sortable(),
    Column::text("email").sortable(),
    Column::text("phone"),
    Column::badge("role").sortable(),
    Column::badge("status").sortable(),
    Column::date("created_at").sortable(),
    Column::date("last_login").sortable(),
];

// The stats endpoint reports camelCase totals; local counts are the fallback.
const CARDS: &[StatCardSpec] = &[
    StatCardSpec {
        label_key: "users.stats.total",
        stats: &["totalUsers", "total"],
        icon: "users",
        tone: CardTone::Neutral,
    },
    StatCardSpec {
        label_key: "users.stats.active",
        stats: &["activeUsers", "status.active"],
        icon: "check-circle",
        tone: CardTone::Success,
    },
    StatCardSpec {
        label_key: "users.stats.pending",
        stats: &["pendingUsers", "status.pending"],
        icon: "clock",
        tone: CardTone::Warning,
    },
    StatCardSpec {
        label_key: "users.stats.suspended",
        stats: &["suspendedUsers", "status.suspended"],
        icon: "ban",
        tone: CardTone::Error,
    },
];

fn source() -> Rc<dyn DataSource> {
    Rc::new(RestSource::new(GlooTransport, &SCHEMA))
}

/// Admin user management.
pub static USERS_LIST: ListPageSpec = ListPageSpec {
    title_key: "users.title",
    subtitle_key: "users.subtitle",
    icon: "users",
    schema: &SCHEMA,
    columns: COLUMNS,
    filters: &["role", "status"],
    date_range: false,
    cards: CARDS,
    layout: ListLayout::Table,
    source,
    detail: None,
};

#[component]
pub fn UsersList() -> impl IntoView {
    view! { <ListPage spec=USERS_LIST /> }
}
