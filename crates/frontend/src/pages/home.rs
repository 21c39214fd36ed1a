use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MARKETING;
use leptos::prelude::*;
use leptos_router::components::A;

/// (path, icon, i18n key prefix) of the feature tiles.
const FEATURES: [(&str, &str, &str); 3] = [
    ("properties", "building", "home.features.properties"),
    ("services", "briefcase", "home.features.services"),
    ("about", "info", "home.features.about"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();

    let tiles = FEATURES
        .iter()
        .map(|&(path, icon_name, key)| {
            let title_key = format!("{}.title", key);
            let text_key = format!("{}.text", key);
            view! {
                <A href=move || i18n.href(path)>
                    <div class="feature-card">
                        <div class="feature-card__icon">{icon(icon_name)}</div>
                        <h3 class="feature-card__title">{move || i18n.t(&title_key)}</h3>
                        <p class="feature-card__text">{move || i18n.t(&text_key)}</p>
                    </div>
                </A>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="home--marketing" category=PAGE_CAT_MARKETING>
            <section class="hero">
                <h1 class="hero__title">{move || i18n.t("home.hero.title")}</h1>
                <p class="hero__subtitle">{move || i18n.t("home.hero.subtitle")}</p>
                <div class="hero__actions">
                    <A href=move || i18n.href("properties")>
                        <span class="button button--primary">{move || i18n.t("home.hero.browse")}</span>
                    </A>
                    <A href=move || i18n.href("services")>
                        <span class="button button--secondary">{move || i18n.t("home.hero.concierge")}</span>
                    </A>
                </div>
            </section>
            <section class="feature-grid">{tiles}</section>
        </PageFrame>
    }
}
