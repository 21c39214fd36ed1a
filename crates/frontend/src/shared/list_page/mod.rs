//! Generic list page.
//!
//! One component renders every dashboard list: stat cards, filter panel,
//! table or card grid, pagination, row actions and their modals. A
//! [`ListPageSpec`] supplies the schema, the columns and the data source;
//! all list state lives in a [`ListController`] held in a signal.

mod modals;
mod rows;
mod toolbar;

use crate::shared::components::{CardTone, PaginationControls, StatCard};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toasts;
use chrono::Utc;
use contracts::shared::config::app_config;
use contracts::shared::list_view::{
    DataSource, Dispatch, DispatchError, EntitySchema, FetchOutcome, ListController,
    MutationOutcome, MutationRequest, Notifier, QueryEffect, Row, RowAction, StatsScope, Toast,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

pub use modals::RowModal;
pub use rows::{RowCards, RowsTable};
pub use toolbar::ListToolbar;

pub type SourceFactory = fn() -> Rc<dyn DataSource>;

/// Extra content of the view modal, given the row id.
pub type DetailView = fn(String) -> AnyView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    /// Vocabulary value shown as a translated badge.
    Badge,
    Date,
    Money,
    Number,
    Image,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub field: &'static str,
    pub kind: ColumnKind,
    pub sortable: bool,
}

impl Column {
    const fn new(field: &'static str, kind: ColumnKind) -> Self {
        Self {
            field,
            kind,
            sortable: false,
        }
    }

    pub const fn text(field: &'static str) -> Self {
        Self::new(field, ColumnKind::Text)
    }

    pub const fn badge(field: &'static str) -> Self {
        Self::new(field, ColumnKind::Badge)
    }

    pub const fn date(field: &'static str) -> Self {
        Self::new(field, ColumnKind::Date)
    }

    pub const fn money(field: &'static str) -> Self {
        Self::new(field, ColumnKind::Money)
    }

    pub const fn number(field: &'static str) -> Self {
        Self::new(field, ColumnKind::Number)
    }

    pub const fn image(field: &'static str) -> Self {
        Self::new(field, ColumnKind::Image)
    }

    pub const fn sortable(self) -> Self {
        Self {
            sortable: true,
            ..self
        }
    }
}

/// One summary card. `stats` lists candidate labels; the first one present
/// in the computed stats wins, so endpoint and local labels can differ.
#[derive(Debug, Clone, Copy)]
pub struct StatCardSpec {
    pub label_key: &'static str,
    pub stats: &'static [&'static str],
    pub icon: &'static str,
    pub tone: CardTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLayout {
    Table,
    Cards,
}

#[derive(Clone, Copy)]
pub struct ListPageSpec {
    pub title_key: &'static str,
    pub subtitle_key: &'static str,
    pub icon: &'static str,
    pub schema: &'static EntitySchema,
    pub columns: &'static [Column],
    /// Enumerated fields offered as filter selects.
    pub filters: &'static [&'static str],
    /// Show the date range filter on the schema's date field.
    pub date_range: bool,
    pub cards: &'static [StatCardSpec],
    pub layout: ListLayout,
    pub source: SourceFactory,
    pub detail: Option<DetailView>,
}

impl ListPageSpec {
    pub fn page_id(&self) -> String {
        format!("{}--list", self.schema.name)
    }

    /// Human title of a row: the first text column with a value, else the id.
    pub fn row_title(&self, row: &Row) -> String {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Text)
            .find_map(|c| row.get(c.field).filter(|v| !v.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| row.id.clone())
    }
}

pub fn action_icon(action: RowAction) -> &'static str {
    match action {
        RowAction::View => "eye",
        RowAction::Edit => "edit",
        RowAction::Delete => "trash",
        RowAction::Assign => "user-plus",
        RowAction::Close => "x-circle",
        RowAction::Approve => "check",
        RowAction::Reject => "ban",
    }
}

fn dispatch_error_key(err: &DispatchError) -> &'static str {
    match err {
        DispatchError::RowBusy(_) => "list.row_busy",
        DispatchError::ModalBusy => "list.modal_busy",
        DispatchError::RowNotFound(_) => "list.row_missing",
        DispatchError::Unsupported(_) => "list.unsupported",
        DispatchError::Unchanged => "list.no_changes",
        DispatchError::NothingToConfirm | DispatchError::Invalid(_) => "list.invalid",
    }
}

#[component]
pub fn ListPage(spec: ListPageSpec) -> impl IntoView {
    let i18n = use_i18n();
    let toasts = use_toasts();
    let list_config = &app_config().list;

    let ctrl = RwSignal::new(ListController::new(spec.schema, list_config.default_page_size));
    let source = StoredValue::new_local((spec.source)());
    let filters_expanded = RwSignal::new(true);

    let load_stats = move || {
        if !matches!(spec.schema.stats_scope, StatsScope::Endpoint(_)) {
            return;
        }
        let source = source.get_value();
        spawn_local(async move {
            let result = source.fetch_stats().await;
            ctrl.try_update(|c| c.set_endpoint_stats(result));
        });
    };

    let load_data = move || {
        let Some((token, query)) = ctrl.try_update(|c| c.begin_fetch()) else {
            return;
        };
        let source = source.get_value();
        spawn_local(async move {
            let (mut token, mut query) = (token, query);
            loop {
                let result = source.fetch(&query).await;
                match ctrl.try_update(|c| c.finish_fetch(token, result)) {
                    // The page shrank under us: fetch the clamped page.
                    Some(FetchOutcome::OutOfRange) => match ctrl.try_update(|c| c.begin_fetch()) {
                        Some(next) => (token, query) = next,
                        None => break,
                    },
                    _ => break,
                }
            }
        });
    };

    let apply = move |effect: Option<QueryEffect>| {
        if effect == Some(QueryEffect::Refetch) {
            load_data();
        }
    };

    Effect::new(move |_| {
        load_data();
        load_stats();
    });

    on_cleanup(move || {
        ctrl.try_update(|c| c.cancel_fetch());
    });

    let run_mutation = move |request: MutationRequest| {
        let source = source.get_value();
        spawn_local(async move {
            let result = source.mutate(&request).await;
            let outcome = ctrl.try_update(|c| c.complete_mutation(&request, result, &toasts));
            match outcome {
                Some(MutationOutcome::Applied) => load_stats(),
                Some(MutationOutcome::Refetch) => {
                    load_data();
                    load_stats();
                }
                Some(MutationOutcome::Failed(_)) | None => {}
            }
        });
    };

    let on_action = Callback::new(move |(action, row_id): (RowAction, String)| {
        match ctrl.try_update(|c| c.dispatch(action, &row_id)) {
            Some(Ok(Dispatch::Mutate(request))) => run_mutation(request),
            Some(Ok(Dispatch::Opened(kind))) => {
                log::debug!("{}: opened {:?} for {}", spec.schema.name, kind, row_id)
            }
            Some(Err(err)) => {
                log::debug!("{}: {} refused: {}", spec.schema.name, action.tag(), err);
                toasts.notify(Toast::info(i18n.t(dispatch_error_key(&err))));
            }
            None => {}
        }
    });

    let on_confirm = Callback::new(move |_: ()| match ctrl.try_update(|c| c.confirm_modal()) {
        Some(Ok(request)) => run_mutation(request),
        // Field errors are rendered inline by the modal.
        Some(Err(DispatchError::Invalid(_))) | None => {}
        Some(Err(DispatchError::Unchanged)) => {
            toasts.notify(Toast::info(i18n.t(dispatch_error_key(&DispatchError::Unchanged))));
        }
        Some(Err(err)) => log::warn!("{}: confirm refused: {}", spec.schema.name, err),
    });

    let on_cancel = Callback::new(move |_: ()| {
        ctrl.try_update(|c| c.cancel_modal());
    });

    let on_draft = Callback::new(move |(field, value): (String, String)| {
        ctrl.try_update(|c| c.set_draft(&field, value));
    });

    let on_sort = Callback::new(move |field: &'static str| {
        apply(ctrl.try_update(|c| c.toggle_sort(field)));
    });

    let on_page_change = Callback::new(move |page: i64| {
        apply(ctrl.try_update(|c| c.set_page(page)));
    });

    let on_page_size_change = Callback::new(move |raw: String| {
        apply(ctrl.try_update(|c| c.set_page_size_text(&raw)));
    });

    let on_search = Callback::new(move |term: String| {
        apply(ctrl.try_update(|c| c.set_search(term)));
    });

    let on_filter = Callback::new(move |(key, value): (String, String)| {
        apply(ctrl.try_update(|c| c.set_filter(&key, &value)));
    });

    let on_date_range = Callback::new(move |(from, to): (String, String)| {
        apply(ctrl.try_update(|c| c.set_date_range(&from, &to)));
    });

    let on_clear = Callback::new(move |_: ()| {
        apply(ctrl.try_update(|c| c.clear_filters()));
    });

    let loading = Memo::new(move |_| ctrl.with(|c| c.is_loading()));
    let has_loaded = Memo::new(move |_| ctrl.with(|c| c.has_loaded()));
    let is_empty = Memo::new(move |_| ctrl.with(|c| c.is_empty()));
    let paginator = Signal::derive(move || ctrl.with(|c| c.paginator()));
    let stats = Memo::new(move |_| ctrl.with(|c| c.stats(Utc::now())));
    let active_filters = Memo::new(move |_| {
        ctrl.with(|c| c.query().filters.len() + usize::from(!c.query().search.trim().is_empty()))
    });
    let modal_key = Memo::new(move |_| {
        ctrl.with(|c| c.modal().map(|m| (m.kind, m.target.id.clone())))
    });

    let stat_cards = spec
        .cards
        .iter()
        .map(|card| {
            let value = Signal::derive(move || {
                if !has_loaded.get() {
                    return None;
                }
                stats.with(|s| {
                    card.stats
                        .iter()
                        .find(|label| s.contains(label))
                        .map(|label| s.get(label))
                        .or(Some(0))
                })
            });
            view! {
                <StatCard
                    label=Signal::derive(move || i18n.t(card.label_key))
                    icon_name=card.icon
                    value=value
                    tone=card.tone
                />
            }
        })
        .collect_view();

    let body = move || {
        if !has_loaded.get() {
            return if loading.get() {
                view! { <div class="list-state list-state--loading">{i18n.t("common.loading")}</div> }
                    .into_any()
            } else {
                ().into_any()
            };
        }
        if is_empty.get() {
            let key = if active_filters.get() > 0 { "list.no_matches" } else { "list.empty" };
            return view! {
                <div class="list-state list-state--empty">
                    {icon("inbox")}
                    <span>{i18n.t(key)}</span>
                </div>
            }
            .into_any();
        }
        match spec.layout {
            ListLayout::Table => view! { <RowsTable spec=spec ctrl=ctrl on_action=on_action on_sort=on_sort /> }.into_any(),
            ListLayout::Cards => view! { <RowCards spec=spec ctrl=ctrl on_action=on_action on_sort=on_sort /> }.into_any(),
        }
    };

    view! {
        <PageFrame page_id=spec.page_id() category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(spec.icon)}
                    <div>
                        <h1 class="page__title">{move || i18n.t(spec.title_key)}</h1>
                        <p class="page__subtitle">{move || i18n.t(spec.subtitle_key)}</p>
                    </div>
                    <Badge>{move || ctrl.with(|c| c.total_items()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            load_data();
                            load_stats();
                        }
                        disabled=Signal::from(loading)
                    >
                        {icon("refresh")}
                        {move || if loading.get() { i18n.t("common.loading") } else { i18n.t("common.refresh") }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || ctrl.with(|c| c.error().map(str::to_string)).map(|e| view! {
                    <div class="alert alert--error" role="alert">
                        <span>{e}</span>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_data()>
                            {i18n.t("common.retry")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| ctrl.update(|c| c.dismiss_error())
                        >
                            {icon("x")}
                        </Button>
                    </div>
                })}

                <div class="stat-cards">{stat_cards}</div>

                <ListToolbar
                    spec=spec
                    ctrl=ctrl
                    expanded=filters_expanded
                    active_filters=active_filters
                    on_search=on_search
                    on_filter=on_filter
                    on_date_range=on_date_range
                    on_clear=on_clear
                />

                <div class="list-body" class:list-body--loading=move || loading.get()>
                    {body}
                </div>

                <PaginationControls
                    paginator=paginator
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                    page_size_options=list_config.page_size_options.clone()
                />
            </div>

            {move || modal_key.get().map(|(kind, _)| view! {
                <RowModal spec=spec ctrl=ctrl kind=kind on_confirm=on_confirm on_cancel=on_cancel on_draft=on_draft />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_concierge_request;
    use contracts::shared::list_view::FixtureSource;

    const COLUMNS: &[Column] = &[
        Column::text("id"),
        Column::text("client_name").sortable(),
        Column::badge("status"),
    ];

    fn source() -> Rc<dyn DataSource> {
        Rc::new(FixtureSource::new(&a004_concierge_request::SCHEMA, Vec::new()))
    }

    fn spec() -> ListPageSpec {
        ListPageSpec {
            title_key: "tickets.title",
            subtitle_key: "tickets.subtitle",
            icon: "ticket",
            schema: &a004_concierge_request::SCHEMA,
            columns: COLUMNS,
            filters: &["status"],
            date_range: true,
            cards: &[],
            layout: ListLayout::Table,
            source,
            detail: None,
        }
    }

    #[test]
    fn test_row_title_prefers_first_text_value() {
        let spec = spec();
        assert_eq!(spec.page_id(), "tickets--list");
        let row = Row::new("REQ-1").with("client_name", "Sara");
        assert_eq!(spec.row_title(&row), "REQ-1");

        let spec = ListPageSpec { columns: &COLUMNS[1..], ..spec };
        assert_eq!(spec.row_title(&row), "Sara");
        assert_eq!(spec.row_title(&Row::new("REQ-2")), "REQ-2");
    }

    #[test]
    fn test_column_builders() {
        let column = Column::money("price").sortable();
        assert_eq!(column.kind, ColumnKind::Money);
        assert!(column.sortable);
        assert!(!Column::image("image").sortable);
    }

    #[test]
    fn test_dispatch_errors_have_messages() {
        assert_eq!(dispatch_error_key(&DispatchError::ModalBusy), "list.modal_busy");
        assert_eq!(dispatch_error_key(&DispatchError::RowBusy("1".into())), "list.row_busy");
        assert_eq!(dispatch_error_key(&DispatchError::Unchanged), "list.no_changes");
    }
}
