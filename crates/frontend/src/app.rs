use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::routes::routes::AppRoutes;
use crate::shared::i18n::I18n;
use crate::shared::toast::ToastService;
use contracts::shared::config::app_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = app_config();
    log::info!(
        "starting with api port {} and locales {:?}",
        config.api.port,
        config.i18n.locales
    );

    provide_context(AppGlobalContext::new());
    // Scroll lock shared by every open modal
    provide_context(ModalService::new());
    provide_context(I18n::new());
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
