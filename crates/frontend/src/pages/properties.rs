use crate::domain::a007_property::ui::list::PropertiesList;
use leptos::prelude::*;

/// Public listings page; the same card grid partners see on their dashboard.
#[component]
pub fn PropertiesPage() -> impl IntoView {
    view! { <PropertiesList /> }
}
