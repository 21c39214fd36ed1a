//! Top navigation bar: sidebar toggle, brand, language switch and the
//! dashboard role selector.

use crate::layout::global_context::use_global_context;
use crate::shared::i18n::{localized_path, use_i18n};
use crate::shared::icons::icon;
use contracts::enums::user_role::UserRole;
use contracts::shared::config::app_config;
use contracts::shared::i18n::locale_from_path;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

/// Same page under another locale: `/en/about` -> `/ar/about`.
fn switch_locale_path(current: &str, target: &str) -> String {
    let config = &app_config().i18n;
    let (_, rest) = locale_from_path(current, &config.locales, &config.default_locale);
    localized_path(target, rest)
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let i18n = use_i18n();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let is_sidebar_visible = move || ctx.left_open.get();

    let locale_links = app_config()
        .i18n
        .locales
        .iter()
        .map(|locale| {
            let target = locale.clone();
            let label_key = format!("locale.{}", locale);
            let is_current = {
                let locale = locale.clone();
                move || i18n.locale() == locale
            };
            view! {
                <A href=move || switch_locale_path(&pathname.get(), &target)>
                    <span
                        class="top-header__locale"
                        class:top-header__locale--active=is_current
                    >
                        {move || i18n.t(&label_key)}
                    </span>
                </A>
            }
        })
        .collect_view();

    let role_options = UserRole::all()
        .into_iter()
        .map(|role| {
            let key = role.label_key();
            view! {
                <option value=role.code() selected=move || ctx.role.get() == role>
                    {move || i18n.t(&key)}
                </option>
            }
        })
        .collect_view();

    let on_role_change = move |ev: leptos::ev::Event| {
        let Some(role) = UserRole::from_code(&event_target_value(&ev)) else {
            return;
        };
        ctx.set_role(role);
        navigate(&i18n.href(&format!("dashboard/{}", role.code())), Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { i18n.t("nav.hide_menu") } else { i18n.t("nav.show_menu") }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <A href=move || i18n.href("")>
                    <span class="top-header__title">{move || i18n.t("app.title")}</span>
                </A>
            </div>

            <div class="top-header__actions">
                <div class="top-header__locales">
                    {icon("globe")}
                    {locale_links}
                </div>

                <label class="top-header__user">
                    {icon("user")}
                    <span class="visually-hidden">{move || i18n.t("nav.role")}</span>
                    <select
                        class="top-header__role"
                        prop:value=move || ctx.role.get().code()
                        on:change=on_role_change
                    >
                        {role_options}
                    </select>
                </label>
            </div>
        </header>
    }
}
