use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Collapsible left zone of the shell.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();
    let is_open = move || ctx.left_open.get();

    view! {
        <aside data-zone="left" class="left app-sidebar" class:hidden=move || !is_open()>
            {children()}
        </aside>
    }
}
