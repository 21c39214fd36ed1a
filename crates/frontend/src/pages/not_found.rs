use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_MARKETING;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <PageFrame page_id="not-found--marketing" category=PAGE_CAT_MARKETING>
            <div class="list-state list-state--empty">
                {icon("alert-circle")}
                <h1 class="page__title">{move || i18n.t("not_found.title")}</h1>
                <p>{move || i18n.t("not_found.message")}</p>
                <A href=move || i18n.href("")>{move || i18n.t("nav.home")}</A>
            </div>
        </PageFrame>
    }
}
