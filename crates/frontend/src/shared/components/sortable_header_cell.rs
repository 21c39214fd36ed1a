use crate::shared::list_utils::sort_indicator;
use contracts::shared::list_view::SortSpec;
use leptos::prelude::*;
use thaw::*;

/// Table header that toggles the sort of its field on click.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: Signal<String>,
    sort_field: &'static str,
    #[prop(into)] current_sort: Signal<Option<SortSpec>>,
    on_sort: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_field)
            >
                {move || label.get()}
                <span class="table__sort-indicator">
                    {move || sort_indicator(current_sort.get().as_ref(), sort_field)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
