use crate::shared::components::CardTone;
use crate::shared::list_page::{Column, ListLayout, ListPage, ListPageSpec, StatCardSpec};
use contracts::domain::a007_property::{fixture_source, SCHEMA};
use contracts::shared::list_view::{DataSource, FixtureSource};
use leptos::prelude::*;
use std::rc::Rc;

const COLUMNS: &[Column] = &[
    Column::image("image"),
    Column::text("title").sortable(),
    Column::text("location"),
    Column::money("price").sortable(),
    Column::number("bedrooms").sortable(),
    Column::number("bathrooms"),
    Column::number("area").sortable(),
    Column::badge("property_type"),
    Column::badge("listing"),
];

const CARDS: &[StatCardSpec] = &[
    StatCardSpec {
        label_key: "properties.stats.total",
        stats: &["total"],
        icon: "home",
        tone: CardTone::Neutral,
    },
    StatCardSpec {
        label_key: "properties.stats.sale",
        stats: &["listing.sale"],
        icon: "key",
        tone: CardTone::Success,
    },
    StatCardSpec {
        label_key: "properties.stats.rent",
        stats: &["listing.rent"],
        icon: "building",
        tone: CardTone::Neutral,
    },
];

/// Listings are bundled with the app; a broken bundle shows an empty list.
fn source() -> Rc<dyn DataSource> {
    match fixture_source() {
        Ok(source) => Rc::new(source),
        Err(err) => {
            log::error!("properties: bundled listings unreadable: {}", err);
            Rc::new(FixtureSource::new(&SCHEMA, Vec::new()))
        }
    }
}

/// Property listings as a card grid.
pub static PROPERTIES_LIST: ListPageSpec = ListPageSpec {
    title_key: "properties.title",
    subtitle_key: "properties.subtitle",
    icon: "home",
    schema: &SCHEMA,
    columns: COLUMNS,
    filters: &["property_type", "listing"],
    date_range: false,
    cards: CARDS,
    layout: ListLayout::Cards,
    source,
    detail: None,
};

#[component]
pub fn PropertiesList() -> impl IntoView {
    view! { <ListPage spec=PROPERTIES_LIST /> }
}
