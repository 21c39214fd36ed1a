pub mod global_context;
pub mod left;
pub mod modal_service;
pub mod top_header;

pub use modal_service::ModalService;

use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let i18n = use_i18n();
    let modals = modal_service::use_modal_service();

    view! {
        <div
            class="app-layout"
            class:app-layout--rtl=move || i18n.is_rtl()
            class:app-layout--modal-open=move || modals.is_locked()
        >
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
