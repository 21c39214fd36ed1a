use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MARKETING;
use leptos::prelude::*;

const VALUES: [(&str, &str); 4] = [
    ("star", "about.values.quality"),
    ("handshake", "about.values.trust"),
    ("key", "about.values.access"),
    ("globe", "about.values.local"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let i18n = use_i18n();

    let values = VALUES
        .iter()
        .map(|&(icon_name, key)| {
            let title_key = format!("{}.title", key);
            let text_key = format!("{}.text", key);
            view! {
                <div class="feature-card">
                    <div class="feature-card__icon">{icon(icon_name)}</div>
                    <h3 class="feature-card__title">{move || i18n.t(&title_key)}</h3>
                    <p class="feature-card__text">{move || i18n.t(&text_key)}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="about--marketing" category=PAGE_CAT_MARKETING>
            <section class="hero hero--compact">
                <h1 class="hero__title">{move || i18n.t("about.title")}</h1>
                <p class="hero__subtitle">{move || i18n.t("about.subtitle")}</p>
            </section>
            <section class="prose">
                <h2>{move || i18n.t("about.mission.title")}</h2>
                <p>{move || i18n.t("about.mission.text")}</p>
            </section>
            <section class="feature-grid">{values}</section>
        </PageFrame>
    }
}
