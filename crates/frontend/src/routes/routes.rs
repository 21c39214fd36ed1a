use crate::layout::Shell;
use crate::pages::about::AboutPage;
use crate::pages::dashboard::{DashboardHome, DashboardList};
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::properties::PropertiesPage;
use crate::pages::services::ServicesPage;
use crate::shared::i18n::use_i18n;
use crate::shared::toast::ToastHost;
use contracts::shared::config::app_config;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// Applies the `:locale` segment, then renders the shell around the page.
#[component]
fn LocaleShell() -> impl IntoView {
    let i18n = use_i18n();
    let params = use_params_map();

    Effect::new(move |_| {
        let locale = params.with(|p| p.get("locale")).unwrap_or_default();
        i18n.set_locale(&locale);
    });

    view! {
        <Shell>
            <Outlet />
        </Shell>
        <ToastHost />
    }
}

#[component]
fn DefaultLocale() -> impl IntoView {
    let path = format!("/{}", app_config().i18n.default_locale);
    view! { <Redirect path=path /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=DefaultLocale />
                <ParentRoute path=path!("/:locale") view=LocaleShell>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("about") view=AboutPage />
                    <Route path=path!("services") view=ServicesPage />
                    <Route path=path!("properties") view=PropertiesPage />
                    <Route path=path!("dashboard/:role") view=DashboardHome />
                    <Route path=path!("dashboard/:role/:list") view=DashboardList />
                    <Route path=path!("*any") view=NotFound />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
