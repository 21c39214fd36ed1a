//! Role dashboards: an overview of the role's lists and the list pages
//! themselves under `dashboard/:role/:list`.

use crate::domain::list_page_spec;
use crate::layout::global_context::use_global_context;
use crate::pages::not_found::NotFound;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_page::{ListPage, ListPageSpec};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::enums::user_role::UserRole;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// The list only opens from a dashboard that offers it.
fn resolve_list(role: &str, list: &str) -> Option<(UserRole, ListPageSpec)> {
    let role = UserRole::from_code(role)?;
    if !role.dashboard_lists().contains(&list) {
        return None;
    }
    list_page_spec(list).map(|spec| (role, spec))
}

fn use_route_role() -> Memo<Option<UserRole>> {
    let params = use_params_map();
    let ctx = use_global_context();
    let role = Memo::new(move |_| {
        params.with(|p| p.get("role")).and_then(|code| UserRole::from_code(&code))
    });
    Effect::new(move |_| {
        if let Some(role) = role.get() {
            ctx.set_role(role);
        }
    });
    role
}

#[component]
pub fn DashboardHome() -> impl IntoView {
    let role = use_route_role();

    move || match role.get() {
        Some(role) => view! { <RoleOverview role=role /> }.into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn RoleOverview(role: UserRole) -> impl IntoView {
    let i18n = use_i18n();
    let role_key = role.label_key();

    let tiles = role
        .dashboard_lists()
        .iter()
        .filter_map(|name| list_page_spec(name))
        .map(|spec| {
            let path = format!("dashboard/{}/{}", role.code(), spec.schema.name);
            view! {
                <A href=move || i18n.href(&path)>
                    <div class="feature-card">
                        <div class="feature-card__icon">{icon(spec.icon)}</div>
                        <h3 class="feature-card__title">{move || i18n.t(spec.title_key)}</h3>
                        <p class="feature-card__text">{move || i18n.t(spec.subtitle_key)}</p>
                    </div>
                </A>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id=format!("{}--dashboard", role.code()) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("layout-dashboard")}
                    <div>
                        <h1 class="page__title">
                            {move || i18n.t_args("dashboard.title", &[("role", i18n.t(&role_key))])}
                        </h1>
                        <p class="page__subtitle">{move || i18n.t("dashboard.subtitle")}</p>
                    </div>
                </div>
            </div>
            <div class="feature-grid">{tiles}</div>
        </PageFrame>
    }
}

#[component]
pub fn DashboardList() -> impl IntoView {
    let params = use_params_map();
    let _role = use_route_role();
    let target = Memo::new(move |_| {
        params.with(|p| {
            let role = p.get("role").unwrap_or_default();
            let list = p.get("list").unwrap_or_default();
            resolve_list(&role, &list).map(|(_, spec)| spec.schema.name)
        })
    });

    // Rebuilt only when the list itself changes, so every list starts fresh.
    move || match target.get().and_then(list_page_spec) {
        Some(spec) => view! { <ListPage spec=spec /> }.into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}
