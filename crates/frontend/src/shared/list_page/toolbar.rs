use super::rows::column_label_key;
use super::ListPageSpec;
use crate::shared::components::{DateRangePicker, FilterPanel};
use crate::shared::i18n::use_i18n;
use crate::shared::list_utils::SearchInput;
use contracts::shared::list_view::filter::{DATE_FROM, DATE_TO};
use contracts::shared::list_view::{ListController, FILTER_ALL};
use leptos::prelude::*;
use thaw::*;

/// Search box, enum filter selects and the optional date range.
#[component]
pub fn ListToolbar(
    spec: ListPageSpec,
    ctrl: RwSignal<ListController>,
    expanded: RwSignal<bool>,
    #[prop(into)] active_filters: Signal<usize>,
    on_search: Callback<String>,
    /// `(filter key, value)`; `"all"` or empty clears the filter.
    on_filter: Callback<(String, String)>,
    /// `(date_from, date_to)`, applied as one change.
    on_date_range: Callback<(String, String)>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let schema = spec.schema;
    let search = Memo::new(move |_| ctrl.with(|c| c.query().search.clone()));
    let filter_value = move |key: &'static str| {
        ctrl.with(|c| c.query().filter(key).unwrap_or(FILTER_ALL).to_string())
    };

    let selects = spec
        .filters
        .iter()
        .filter_map(|&field| schema.vocabulary(field).map(|vocabulary| (field, vocabulary)))
        .map(|(field, vocabulary)| {
            let label_key = column_label_key(schema, field);
            let options = vocabulary
                .ui_values()
                .map(|value| {
                    let key = vocabulary.label_key(value);
                    view! {
                        <option value=value selected=move || filter_value(field) == value>
                            {move || i18n.t(&key)}
                        </option>
                    }
                })
                .collect_view();
            view! {
                <label class="filter-select">
                    <span class="filter-select__label">{move || i18n.t(&label_key)}</span>
                    <select
                        class="filter-select__input"
                        prop:value=move || filter_value(field)
                        on:change=move |ev| on_filter.run((field.to_string(), event_target_value(&ev)))
                    >
                        <option value=FILTER_ALL selected=move || filter_value(field) == FILTER_ALL>
                            {move || i18n.t("list.all")}
                        </option>
                        {options}
                    </select>
                </label>
            }
        })
        .collect_view();

    let date_range = (spec.date_range && schema.date_field.is_some()).then(|| {
        let bound = move |key: &'static str| {
            ctrl.with(|c| c.query().filter(key).unwrap_or_default().to_string())
        };
        let label_key = schema
            .date_field
            .map(|f| column_label_key(schema, f))
            .unwrap_or_default();
        view! {
            <DateRangePicker
                date_from=Signal::derive(move || bound(DATE_FROM))
                date_to=Signal::derive(move || bound(DATE_TO))
                on_change=on_date_range
                label=Signal::derive(move || i18n.t(&label_key))
            />
        }
    });

    view! {
        <FilterPanel is_expanded=expanded active_filters_count=active_filters on_clear=on_clear>
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <SearchInput
                    value=search
                    on_change=on_search
                    placeholder=Signal::derive(move || i18n.t("list.search_placeholder"))
                />
                {selects}
                {date_range}
            </Flex>
        </FilterPanel>
    }
}
