use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::shared::list_view::Paginator;
use leptos::prelude::*;

/// First/prev/next/last buttons, the "start-end of total" label and the
/// page-size select. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)] paginator: Signal<Paginator>,
    /// Requested page; out-of-range values are clamped by the receiver.
    on_page_change: Callback<i64>,
    /// Raw value of the page-size select.
    on_page_size_change: Callback<String>,
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let i18n = use_i18n();

    let range_label = move || {
        let range = paginator.get().range();
        i18n.t_args(
            "pager.range",
            &[
                ("start", range.start.to_string()),
                ("end", range.end.to_string()),
                ("total", range.total.to_string()),
            ],
        )
    };

    let page_label = move || {
        let p = paginator.get();
        i18n.t_args(
            "pager.page",
            &[
                ("page", p.page().to_string()),
                ("pages", p.total_pages().to_string()),
            ],
        )
    };

    let page_size = move || paginator.get().page_size();

    view! {
        <div class="pagination-controls">
            <span class="pagination-range">{range_label}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !paginator.get().has_prev()
                title=move || i18n.t("pager.first")
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(paginator.get_untracked().page() as i64 - 1)
                disabled=move || !paginator.get().has_prev()
                title=move || i18n.t("pager.prev")
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{page_label}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(paginator.get_untracked().page() as i64 + 1)
                disabled=move || !paginator.get().has_next()
                title=move || i18n.t("pager.next")
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(paginator.get_untracked().total_pages() as i64)
                disabled=move || !paginator.get().has_next()
                title=move || i18n.t("pager.last")
            >
                {icon("chevrons-right")}
            </button>
            <label class="page-size">
                <span>{move || i18n.t("pager.per_page")}</span>
                <select
                    class="page-size-select"
                    on:change=move |ev| on_page_size_change.run(event_target_value(&ev))
                    prop:value=move || page_size().to_string()
                >
                    {page_size_options.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}
