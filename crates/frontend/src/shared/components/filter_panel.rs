use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible panel holding the filter controls of a list page.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,
    on_clear: Callback<()>,
    children: Children,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">{move || i18n.t("list.filters")}</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <button
                    class="filter-panel__clear"
                    disabled=move || active_filters_count.get() == 0
                    on:click=move |_| on_clear.run(())
                >
                    {move || i18n.t("list.clear_filters")}
                </button>
            </div>
            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible"
                }
            }>
                <div class="filter-panel-content">{children()}</div>
            </div>
        </div>
    }
}
