use super::{action_icon, Column, ColumnKind, ListPageSpec};
use crate::shared::components::{SortableHeaderCell, StatusBadge};
use crate::shared::date_utils::{format_datetime, format_money, format_number};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, sort_indicator};
use contracts::shared::list_view::{EntitySchema, ListController, Row, RowAction};
use leptos::prelude::*;
use thaw::*;

pub fn column_label_key(schema: &EntitySchema, field: &str) -> String {
    match schema.field(field) {
        Some(spec) => spec.label_key(schema.name),
        None => format!("common.{}", field),
    }
}

/// Plain-text rendering of a cell value.
pub fn format_cell(kind: ColumnKind, value: &str) -> String {
    match kind {
        ColumnKind::Date => format_datetime(value),
        ColumnKind::Money => format_money(value),
        ColumnKind::Number => format_number(value, 0),
        ColumnKind::Text | ColumnKind::Badge | ColumnKind::Image => value.to_string(),
    }
}

fn render_cell(schema: &'static EntitySchema, column: Column, row: &Row, term: &str) -> AnyView {
    let value = row.get_or_empty(column.field).to_string();
    match column.kind {
        ColumnKind::Badge => match schema.vocabulary(column.field) {
            Some(vocabulary) => view! { <StatusBadge vocabulary=vocabulary value=value /> }.into_any(),
            None => view! { <span>{value}</span> }.into_any(),
        },
        ColumnKind::Text => highlight_matches(&value, term),
        ColumnKind::Image => view! { <img class="cell-image" src=value alt="" /> }.into_any(),
        kind => view! { <span>{format_cell(kind, &value)}</span> }.into_any(),
    }
}

/// Action buttons of one row; disabled while a mutation on it is in flight.
#[component]
pub fn RowActions(
    schema: &'static EntitySchema,
    ctrl: RwSignal<ListController>,
    row_id: String,
    on_action: Callback<(RowAction, String)>,
) -> impl IntoView {
    let i18n = use_i18n();
    let pending_id = row_id.clone();
    let pending = Signal::derive(move || ctrl.with(|c| c.is_row_pending(&pending_id)));

    schema
        .actions
        .iter()
        .map(|&action| {
            let id = row_id.clone();
            let class = format!("row-action row-action--{}", action.tag());
            view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    class=class
                    disabled=pending
                    on_click=move |_| on_action.run((action, id.clone()))
                    attr:title=move || i18n.t(&action.label_key())
                >
                    {icon(action_icon(action))}
                </Button>
            }
        })
        .collect_view()
}

#[component]
pub fn RowsTable(
    spec: ListPageSpec,
    ctrl: RwSignal<ListController>,
    on_action: Callback<(RowAction, String)>,
    on_sort: Callback<&'static str>,
) -> impl IntoView {
    let i18n = use_i18n();
    let schema = spec.schema;
    let current_sort = Signal::derive(move || ctrl.with(|c| c.query().sort.clone()));
    let term = Signal::derive(move || ctrl.with(|c| c.query().search.clone()));

    let headers = spec
        .columns
        .iter()
        .map(|&column| {
            let key = column_label_key(schema, column.field);
            let label = Signal::derive(move || i18n.t(&key));
            if column.sortable {
                view! {
                    <SortableHeaderCell label=label sort_field=column.field current_sort=current_sort on_sort=on_sort />
                }
                .into_any()
            } else {
                view! { <TableHeaderCell>{move || label.get()}</TableHeaderCell> }.into_any()
            }
        })
        .collect_view();

    view! {
        <div class="table-wrapper">
            <Table attr:id=format!("{}-table", schema.name) attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {headers}
                        <TableHeaderCell>{move || i18n.t("common.actions")}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || ctrl.with(|c| c.visible_rows())
                        key=|row| row.clone()
                        children=move |row| {
                            let cells = spec
                                .columns
                                .iter()
                                .map(|&column| {
                                    let row = row.clone();
                                    view! {
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {move || render_cell(schema, column, &row, &term.get())}
                                            </TableCellLayout>
                                        </TableCell>
                                    }
                                })
                                .collect_view();
                            view! {
                                <TableRow>
                                    {cells}
                                    <TableCell>
                                        <RowActions schema=schema ctrl=ctrl row_id=row.id.clone() on_action=on_action />
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}

/// Card grid: the first image column is the cover, the first text column the
/// title, money columns the price; the remaining columns become facts.
#[component]
pub fn RowCards(
    spec: ListPageSpec,
    ctrl: RwSignal<ListController>,
    on_action: Callback<(RowAction, String)>,
    on_sort: Callback<&'static str>,
) -> impl IntoView {
    let i18n = use_i18n();
    let schema = spec.schema;
    let image = spec.columns.iter().find(|c| c.kind == ColumnKind::Image).copied();
    let title = spec.columns.iter().find(|c| c.kind == ColumnKind::Text).copied();
    let price = spec.columns.iter().find(|c| c.kind == ColumnKind::Money).copied();

    let current_sort = move || ctrl.with(|c| c.query().sort.clone());
    let sort_chips = spec
        .columns
        .iter()
        .filter(|c| c.sortable)
        .map(|&column| {
            let key = column_label_key(schema, column.field);
            view! {
                <button
                    class="sort-chip"
                    class:sort-chip--active=move || current_sort().is_some_and(|s| s.field == column.field)
                    on:click=move |_| on_sort.run(column.field)
                >
                    {move || i18n.t(&key)}
                    {move || sort_indicator(current_sort().as_ref(), column.field)}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="sort-chips">{sort_chips}</div>
        <div class="card-grid">
            <For
                each=move || ctrl.with(|c| c.visible_rows())
                key=|row| row.clone()
                children=move |row| {
                    let cover = image.map(|c| row.get_or_empty(c.field).to_string()).filter(|s| !s.is_empty());
                    let heading = title
                        .map(|c| row.get_or_empty(c.field).to_string())
                        .unwrap_or_else(|| row.id.clone());
                    let amount = price.map(|c| format_money(row.get_or_empty(c.field)));
                    let badges = spec
                        .columns
                        .iter()
                        .filter(|c| c.kind == ColumnKind::Badge)
                        .filter_map(|c| {
                            let value = row.get_or_empty(c.field).to_string();
                            schema
                                .vocabulary(c.field)
                                .filter(|_| !value.is_empty())
                                .map(|vocabulary| view! { <StatusBadge vocabulary=vocabulary value=value /> })
                        })
                        .collect_view();
                    let facts = spec
                        .columns
                        .iter()
                        .filter(|c| matches!(c.kind, ColumnKind::Number | ColumnKind::Date)
                            || (c.kind == ColumnKind::Text && Some(c.field) != title.map(|t| t.field)))
                        .map(|&c| {
                            let key = column_label_key(schema, c.field);
                            let value = format_cell(c.kind, row.get_or_empty(c.field));
                            view! {
                                <div class="listing-card__fact">
                                    <span class="listing-card__fact-label">{move || i18n.t(&key)}</span>
                                    <span class="listing-card__fact-value">{value}</span>
                                </div>
                            }
                        })
                        .collect_view();
                    view! {
                        <article class="listing-card">
                            {cover.map(|src| view! { <img class="listing-card__image" src=src alt="" /> })}
                            <div class="listing-card__body">
                                <h3 class="listing-card__title">{heading}</h3>
                                {amount.map(|a| view! { <div class="listing-card__price">{a}</div> })}
                                <div class="listing-card__badges">{badges}</div>
                                <div class="listing-card__facts">{facts}</div>
                            </div>
                            <div class="listing-card__actions">
                                <RowActions schema=schema ctrl=ctrl row_id=row.id.clone() on_action=on_action />
                            </div>
                        </article>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_property;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(ColumnKind::Money, "1250000"), "$1,250,000");
        assert_eq!(format_cell(ColumnKind::Date, "2024-05-01"), "01.05.2024");
        assert_eq!(format_cell(ColumnKind::Text, "Villa"), "Villa");
    }

    #[test]
    fn test_column_label_keys() {
        assert_eq!(column_label_key(&a007_property::SCHEMA, "price"), "properties.fields.price");
        assert_eq!(column_label_key(&a007_property::SCHEMA, "id"), "common.id");
    }
}
