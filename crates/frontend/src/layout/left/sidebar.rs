//! Sidebar with the site pages and the active role's dashboard lists.

use crate::domain::list_page_spec;
use crate::layout::global_context::use_global_context;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    /// Path without the locale prefix.
    path: String,
    label_key: String,
    icon: &'static str,
}

impl MenuItem {
    fn new(path: impl Into<String>, label_key: impl Into<String>, icon: &'static str) -> Self {
        Self {
            path: path.into(),
            label_key: label_key.into(),
            icon,
        }
    }
}

fn site_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("", "nav.home", "home"),
        MenuItem::new("about", "nav.about", "info"),
        MenuItem::new("services", "nav.services", "briefcase"),
        MenuItem::new("properties", "nav.properties", "building"),
    ]
}

fn dashboard_items(role: contracts::enums::user_role::UserRole) -> Vec<MenuItem> {
    let base = format!("dashboard/{}", role.code());
    let lists = role.dashboard_lists().iter().filter_map(|name| {
        list_page_spec(name).map(|spec| {
            MenuItem::new(format!("{}/{}", base, name), spec.title_key, spec.icon)
        })
    });
    std::iter::once(MenuItem::new(base.clone(), "nav.overview", "layout-dashboard"))
        .chain(lists)
        .collect()
}

#[component]
fn MenuLink(item: MenuItem) -> impl IntoView {
    let i18n = use_i18n();
    let location = use_location();
    let path = item.path.clone();
    let href = move || i18n.href(&path);
    let target = item.path.clone();
    let is_active = move || {
        let current = location.pathname.get();
        let current = current.trim_end_matches('/');
        current == i18n.href(&target).trim_end_matches('/')
    };
    let label_key = item.label_key;

    view! {
        <A href=href attr:class="app-sidebar__link">
            <div class="app-sidebar__item" class:app-sidebar__item--active=is_active>
                <div class="app-sidebar__item-content">
                    {icon(item.icon)}
                    <span>{move || i18n.t(&label_key)}</span>
                </div>
            </div>
        </A>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let i18n = use_i18n();
    let dashboard_expanded = RwSignal::new(true);

    let site = site_items()
        .into_iter()
        .map(|item| view! { <MenuLink item=item /> })
        .collect_view();

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__group">{site}</div>

            <div class="app-sidebar__group">
                <div
                    class="app-sidebar__item app-sidebar__item--group"
                    on:click=move |_| dashboard_expanded.update(|v| *v = !*v)
                >
                    <div class="app-sidebar__item-content">
                        {icon("layout-dashboard")}
                        <span>{move || i18n.t("nav.dashboard")}</span>
                    </div>
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=move || dashboard_expanded.get()
                    >
                        {icon("chevron-right")}
                    </div>
                </div>
                <Show when=move || dashboard_expanded.get()>
                    <div class="app-sidebar__children">
                        {move || {
                            dashboard_items(ctx.role.get())
                                .into_iter()
                                .map(|item| view! { <MenuLink item=item /> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::user_role::UserRole;

    #[test]
    fn test_dashboard_items_follow_role() {
        let items = dashboard_items(UserRole::Client);
        let paths: Vec<_> = items.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["dashboard/client", "dashboard/client/bookings", "dashboard/client/inquiries"]
        );
        assert_eq!(items[1].label_key, "bookings.title");

        for role in UserRole::all() {
            assert_eq!(dashboard_items(role).len(), role.dashboard_lists().len() + 1);
        }
    }
}
