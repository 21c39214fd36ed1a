//! Generic list-view controller.
//!
//! Owns the query state, the rows of the last successful fetch and the modal
//! state of one page. It does no I/O itself: the page starts a fetch with
//! [`ListController::begin_fetch`], awaits its [`DataSource`](super::source::DataSource)
//! and hands the result back with [`ListController::finish_fetch`]. Mutations
//! follow the same pattern through `confirm_modal`/`dispatch` and
//! `complete_mutation`.

use super::dispatcher::{
    ActionDispatcher, Dispatch, DispatchError, ModalState, MutationKind, MutationRequest,
    RowAction,
};
use super::error::{ListError, GENERIC_MUTATION_MESSAGE};
use super::filter::{apply_filters, matches, sort_rows, DATE_FROM, DATE_TO};
use super::merge::merge_confirmed;
use super::notify::{Notifier, Toast};
use super::page::PageResult;
use super::paginator::Paginator;
use super::query::QueryState;
use super::request_guard::{RequestGuard, RequestToken};
use super::row::Row;
use super::schema::{EntitySchema, FilterMode, StatsScope};
use super::stats::{compute_stats, Stats};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// What the page has to do after a query change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryEffect {
    /// Backend parameters changed: start a new fetch.
    Refetch,
    /// Resident rows cover the change: just re-render.
    Local,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// Applied, but the requested page no longer exists; the page index was
    /// clamped and a new fetch is needed.
    OutOfRange,
    Failed(String),
    /// Superseded by a newer request and discarded.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    /// Applied, but the resident backend page no longer fills the pager
    /// (rows left it or the page index moved); fetch again.
    Refetch,
    Failed(String),
}

pub struct ListController {
    schema: &'static EntitySchema,
    query: QueryState,
    loaded: Vec<Row>,
    total_items: usize,
    paginated: bool,
    loading: bool,
    has_loaded: bool,
    error: Option<String>,
    guard: RequestGuard,
    dispatcher: ActionDispatcher,
    endpoint_stats: Option<Stats>,
}

impl ListController {
    pub fn new(schema: &'static EntitySchema, page_size: usize) -> Self {
        Self {
            schema,
            query: QueryState::new(page_size),
            loaded: Vec::new(),
            total_items: 0,
            paginated: false,
            loading: false,
            has_loaded: false,
            error: None,
            guard: RequestGuard::new(),
            dispatcher: ActionDispatcher::new(),
            endpoint_stats: None,
        }
    }

    pub fn schema(&self) -> &'static EntitySchema {
        self.schema
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Rows of the last successful fetch, before local filtering and paging.
    pub fn loaded_rows(&self) -> &[Row] {
        &self.loaded
    }

    /// True once a fetch succeeded and nothing matched.
    pub fn is_empty(&self) -> bool {
        self.has_loaded && self.total_items() == 0
    }

    fn effect_of_query_change(&self) -> QueryEffect {
        match self.schema.filter_mode {
            FilterMode::Client => QueryEffect::Local,
            FilterMode::Server | FilterMode::ServerVerified => QueryEffect::Refetch,
        }
    }

    fn effect_of_page_change(&self) -> QueryEffect {
        if self.paginated {
            QueryEffect::Refetch
        } else {
            QueryEffect::Local
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) -> QueryEffect {
        if self.query.set_search(term) {
            self.effect_of_query_change()
        } else {
            QueryEffect::Unchanged
        }
    }

    pub fn set_filter(&mut self, key: &str, value: &str) -> QueryEffect {
        if self.query.set_filter(key, value) {
            self.effect_of_query_change()
        } else {
            QueryEffect::Unchanged
        }
    }

    /// Sets both date bounds at once; empty clears a bound.
    pub fn set_date_range(&mut self, from: &str, to: &str) -> QueryEffect {
        let from_changed = self.query.set_filter(DATE_FROM, from);
        let to_changed = self.query.set_filter(DATE_TO, to);
        if from_changed || to_changed {
            self.effect_of_query_change()
        } else {
            QueryEffect::Unchanged
        }
    }

    pub fn clear_filters(&mut self) -> QueryEffect {
        if self.query.clear_all() {
            self.effect_of_query_change()
        } else {
            QueryEffect::Unchanged
        }
    }

    pub fn toggle_sort(&mut self, field: &str) -> QueryEffect {
        self.query.toggle_sort(field);
        if self.paginated {
            self.effect_of_query_change()
        } else {
            QueryEffect::Local
        }
    }

    /// Jumps to `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: i64) -> QueryEffect {
        let target = self.paginator().clamp(page);
        if target == self.query.page {
            return QueryEffect::Unchanged;
        }
        self.query.set_page(target);
        self.effect_of_page_change()
    }

    /// Changes the page size keeping the current page when it still exists,
    /// otherwise moving to the new last page.
    pub fn set_page_size(&mut self, page_size: usize) -> QueryEffect {
        if page_size == 0 || page_size == self.query.page_size {
            return QueryEffect::Unchanged;
        }
        let mut paginator = self.paginator();
        let page = paginator.set_page_size(page_size);
        self.query.page_size = page_size;
        self.query.set_page(page);
        self.effect_of_page_change()
    }

    /// Page-size select handler; non-numeric or zero input is ignored.
    pub fn set_page_size_text(&mut self, raw: &str) -> QueryEffect {
        match raw.trim().parse::<usize>() {
            Ok(size) => self.set_page_size(size),
            Err(_) => QueryEffect::Unchanged,
        }
    }

    /// Starts a fetch; any fetch still in flight becomes stale.
    pub fn begin_fetch(&mut self) -> (RequestToken, QueryState) {
        self.loading = true;
        let token = self.guard.issue();
        log::debug!("{}: fetch #{} started", self.schema.name, token.value());
        (token, self.query.clone())
    }

    pub fn finish_fetch(
        &mut self,
        token: RequestToken,
        result: Result<PageResult, ListError>,
    ) -> FetchOutcome {
        if !self.guard.is_current(token) {
            log::debug!("{}: dropped stale fetch #{}", self.schema.name, token.value());
            return FetchOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                log::debug!(
                    "{}: fetch #{} returned {} row(s) of {}",
                    self.schema.name,
                    token.value(),
                    page.rows.len(),
                    page.total_items
                );
                self.loaded = page.rows;
                self.total_items = page.total_items;
                self.paginated = page.paginated;
                self.has_loaded = true;
                self.error = None;

                let clamped = self.paginator().clamp(self.query.page as i64);
                if clamped != self.query.page {
                    self.query.set_page(clamped);
                    if self.paginated {
                        return FetchOutcome::OutOfRange;
                    }
                }
                FetchOutcome::Applied
            }
            Err(err) if err.is_stale() => FetchOutcome::Stale,
            Err(err) => {
                let message = err.user_message();
                log::warn!("{}: fetch #{} failed: {}", self.schema.name, token.value(), err);
                self.error = Some(message.clone());
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Marks any in-flight fetch stale, e.g. when the page unmounts.
    pub fn cancel_fetch(&mut self) {
        self.guard.invalidate();
        self.loading = false;
    }

    /// Resident rows after the local filter/sort stage.
    fn filtered(&self) -> Vec<Row> {
        let mut rows = match self.schema.filter_mode {
            FilterMode::Server => self.loaded.clone(),
            FilterMode::ServerVerified | FilterMode::Client => {
                apply_filters(&self.loaded, &self.query, self.schema)
            }
        };
        if !self.paginated {
            if let Some(sort) = &self.query.sort {
                sort_rows(&mut rows, sort);
            }
        }
        rows
    }

    /// Rows to render; never more than one page.
    pub fn visible_rows(&self) -> Vec<Row> {
        let rows = self.filtered();
        let skip = if self.paginated { 0 } else { self.query.offset() };
        rows.into_iter()
            .skip(skip)
            .take(self.query.page_size)
            .collect()
    }

    pub fn total_items(&self) -> usize {
        if self.paginated {
            self.total_items
        } else {
            self.filtered().len()
        }
    }

    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.total_items(), self.query.page_size, self.query.page)
    }

    /// A backend page showing fewer rows than the pager's range promises.
    fn page_is_short(&self) -> bool {
        if !self.paginated {
            return false;
        }
        let range = self.paginator().range();
        let expected = if range.total == 0 {
            0
        } else {
            range.end + 1 - range.start
        };
        self.visible_rows().len() < expected
    }

    /// Summary counts according to the schema's stats scope.
    pub fn stats(&self, now: DateTime<Utc>) -> Stats {
        match self.schema.stats_scope {
            StatsScope::Endpoint(_) => self
                .endpoint_stats
                .clone()
                .unwrap_or_else(|| compute_stats(&self.loaded, self.schema, now)),
            StatsScope::CurrentPage => compute_stats(&self.visible_rows(), self.schema, now),
            StatsScope::LoadedSet => compute_stats(&self.loaded, self.schema, now),
        }
    }

    pub fn set_endpoint_stats(&mut self, result: Result<Option<Stats>, ListError>) {
        match result {
            Ok(stats) => self.endpoint_stats = stats,
            Err(err) => log::warn!("{}: stats fetch failed: {}", self.schema.name, err),
        }
    }

    pub fn modal(&self) -> Option<&ModalState> {
        self.dispatcher.modal()
    }

    pub fn is_row_pending(&self, row_id: &str) -> bool {
        self.dispatcher.is_pending(row_id)
    }

    pub fn dispatch(&mut self, action: RowAction, row_id: &str) -> Result<Dispatch, DispatchError> {
        let row = self
            .loaded
            .iter()
            .find(|r| r.id == row_id)
            .ok_or_else(|| DispatchError::RowNotFound(row_id.to_string()))?;
        self.dispatcher.dispatch(action, row, self.schema)
    }

    pub fn set_draft(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.dispatcher.set_draft(field, value)
    }

    pub fn cancel_modal(&mut self) -> bool {
        self.dispatcher.cancel()
    }

    pub fn confirm_modal(&mut self) -> Result<MutationRequest, DispatchError> {
        self.dispatcher.confirm(self.schema)
    }

    /// Reconciles the outcome of a mutation and notifies the user.
    pub fn complete_mutation(
        &mut self,
        request: &MutationRequest,
        result: Result<Option<Value>, ListError>,
        notifier: &dyn Notifier,
    ) -> MutationOutcome {
        let label = self.schema.label;
        match result {
            Ok(confirmed) => {
                let page_before = self.query.page;
                if request.kind == MutationKind::Delete {
                    let before = self.loaded.len();
                    self.loaded.retain(|r| r.id != request.row_id);
                    if self.paginated && self.loaded.len() < before {
                        self.total_items = self.total_items.saturating_sub(1);
                    }
                } else {
                    let merged = merge_confirmed(&request.submitted, confirmed.as_ref(), self.schema);
                    if let Some(row) = self.loaded.iter_mut().find(|r| r.id == request.row_id) {
                        let matched = matches(row, &self.query, self.schema);
                        *row = merged;
                        // The backend total still counts a row that left the filter.
                        if self.paginated
                            && self.schema.filter_mode == FilterMode::ServerVerified
                            && matched
                            && !matches(row, &self.query, self.schema)
                        {
                            self.total_items = self.total_items.saturating_sub(1);
                        }
                    }
                }
                let page = self.paginator().clamp(self.query.page as i64);
                self.query.set_page(page);

                self.dispatcher.settle(request, Ok(()));
                log::info!(
                    "{}: {} {} {}",
                    self.schema.name,
                    label,
                    request.row_id,
                    request.action.past_tense()
                );
                notifier.notify(Toast::success(format!(
                    "{} {} successfully",
                    label,
                    request.action.past_tense()
                )));
                if self.query.page != page_before || self.page_is_short() {
                    MutationOutcome::Refetch
                } else {
                    MutationOutcome::Applied
                }
            }
            Err(err) => {
                let mut message = err.user_message();
                if message.is_empty() {
                    message = GENERIC_MUTATION_MESSAGE.to_string();
                }
                log::warn!(
                    "{}: {} on {} failed: {}",
                    self.schema.name,
                    request.action.tag(),
                    request.row_id,
                    err
                );
                self.dispatcher.settle(request, Err(message.clone()));
                notifier.notify(Toast::error(message.clone()));
                MutationOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::dispatcher::ModalKind;
    use crate::shared::list_view::error::ApiError;
    use crate::shared::list_view::notify::ToastLevel;
    use crate::shared::list_view::paginator::ItemRange;
    use crate::shared::list_view::source::{query_params, DataSource, FixtureSource};
    use crate::shared::list_view::testing::{
        ticket, RecordingNotifier, LOCAL_TICKETS, SERVER_TICKETS, TICKETS,
    };
    use chrono::TimeZone;
    use serde_json::json;

    fn loaded(rows: Vec<Row>, total: Option<usize>) -> ListController {
        loaded_in(&TICKETS, rows, total)
    }

    fn loaded_in(
        schema: &'static EntitySchema,
        rows: Vec<Row>,
        total: Option<usize>,
    ) -> ListController {
        let mut c = ListController::new(schema, 10);
        let (token, _) = c.begin_fetch();
        assert_eq!(c.finish_fetch(token, Ok(PageResult::new(rows, total))), FetchOutcome::Applied);
        c
    }

    fn abc() -> Vec<Row> {
        vec![
            ticket("A", "Amal", "pending"),
            ticket("B", "Basil", "in-progress"),
            ticket("C", "Carla", "completed"),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    fn pending(range: std::ops::RangeInclusive<usize>) -> Vec<Row> {
        range.map(|i| ticket(&i.to_string(), "P", "pending")).collect()
    }

    fn status_change(c: &mut ListController, action: RowAction, row_id: &str) -> MutationRequest {
        match c.dispatch(action, row_id).unwrap() {
            Dispatch::Mutate(request) => request,
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut c = ListController::new(&TICKETS, 10);
        c.set_search("a");
        let (first, _) = c.begin_fetch();
        c.set_search("ab");
        let (second, query) = c.begin_fetch();
        assert_eq!(query.search, "ab");

        let fresh = vec![ticket("2", "Abby", "pending")];
        assert_eq!(c.finish_fetch(second, Ok(PageResult::new(fresh, Some(1)))), FetchOutcome::Applied);

        let late = vec![ticket("1", "Adam", "pending")];
        assert_eq!(c.finish_fetch(first, Ok(PageResult::new(late, Some(1)))), FetchOutcome::Stale);
        assert_eq!(ids(&c.visible_rows()), vec!["2"]);
        assert!(!c.is_loading());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_rows() {
        let mut c = loaded(abc(), Some(3));
        let (token, _) = c.begin_fetch();
        let err = ListError::fetch(ApiError::new(Some(500), None));
        let outcome = c.finish_fetch(token, Err(err));

        assert_eq!(outcome, FetchOutcome::Failed("Failed to load data (500)".to_string()));
        assert_eq!(ids(&c.visible_rows()), vec!["A", "B", "C"]);
        assert_eq!(c.error(), Some("Failed to load data (500)"));
        assert!(!c.is_loading());

        c.dismiss_error();
        assert_eq!(c.error(), None);
    }

    #[test]
    fn test_page_size_change_clamps_page() {
        let rows: Vec<Row> = (41..=47).map(|i| ticket(&i.to_string(), "P", "pending")).collect();
        let mut c = loaded(rows, Some(47));
        assert_eq!(c.set_page(5), QueryEffect::Refetch);
        assert_eq!(c.paginator().total_pages(), 5);

        assert_eq!(c.set_page_size_text("20"), QueryEffect::Refetch);
        assert_eq!(c.query().page, 3);
        assert_eq!(c.paginator().total_pages(), 3);

        assert_eq!(c.set_page_size_text("abc"), QueryEffect::Unchanged);
        assert_eq!(c.set_page(99), QueryEffect::Unchanged);
        assert_eq!(c.set_page(-4), QueryEffect::Refetch);
        assert_eq!(c.query().page, 1);
    }

    #[test]
    fn test_search_and_filter_reset_page() {
        let rows: Vec<Row> = (1..=10).map(|i| ticket(&i.to_string(), "P", "pending")).collect();
        let mut c = loaded(rows, Some(30));
        c.set_page(3);
        assert_eq!(c.set_search("villa"), QueryEffect::Refetch);
        assert_eq!(c.query().page, 1);

        c.set_page(2);
        assert_eq!(c.set_filter("status", "pending"), QueryEffect::Refetch);
        assert_eq!(c.query().page, 1);
        assert_eq!(c.set_filter("status", "pending"), QueryEffect::Unchanged);
    }

    #[test]
    fn test_unpaginated_response_is_paged_locally() {
        let rows: Vec<Row> = (1..=12).map(|i| ticket(&format!("{:02}", i), "P", "pending")).collect();
        let mut c = ListController::new(&TICKETS, 5);
        let (token, _) = c.begin_fetch();
        c.finish_fetch(token, Ok(PageResult::unpaginated(rows)));

        assert_eq!(c.visible_rows().len(), 5);
        assert_eq!(c.set_page(3), QueryEffect::Local);
        assert_eq!(ids(&c.visible_rows()), vec!["11", "12"]);
        assert_eq!(c.paginator().range().start, 11);
    }

    #[test]
    fn test_edit_round_trip_merges_server_object() {
        let mut c = loaded(abc(), Some(3));
        let notifier = RecordingNotifier::default();

        assert_eq!(c.dispatch(RowAction::Edit, "A"), Ok(Dispatch::Opened(ModalKind::Edit)));
        c.set_draft("status", "completed");
        let request = c.confirm_modal().unwrap();
        assert!(c.is_row_pending("A"));

        let response = json!({ "data": { "id": "A", "status": "COMPLETED" } });
        let outcome = c.complete_mutation(&request, Ok(Some(response)), &notifier);
        assert_eq!(outcome, MutationOutcome::Applied);

        let row = c.loaded_rows().iter().find(|r| r.id == "A").unwrap();
        assert_eq!(row.get("status"), Some("completed"));
        assert_eq!(row.get("client_name"), Some("Amal"));
        assert!(c.modal().is_none());
        assert!(!c.is_row_pending("A"));

        let toasts = notifier.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].level, ToastLevel::Success);
        assert_eq!(toasts[0].message, "Ticket updated successfully");
    }

    #[test]
    fn test_delete_only_after_confirm() {
        let mut c = loaded(abc(), Some(3));
        let notifier = RecordingNotifier::default();

        c.dispatch(RowAction::Delete, "B").unwrap();
        assert_eq!(c.loaded_rows().len(), 3);
        let request = c.confirm_modal().unwrap();
        let outcome = c.complete_mutation(&request, Ok(None), &notifier);

        assert_eq!(outcome, MutationOutcome::Applied);
        assert_eq!(ids(&c.visible_rows()), vec!["A", "C"]);
        assert_eq!(c.total_items(), 2);
        assert!(c.modal().is_none());
    }

    #[test]
    fn test_deleting_the_last_row_of_a_backend_page_refetches() {
        let notifier = RecordingNotifier::default();
        let mut c = loaded(pending(1..=10), Some(11));
        assert_eq!(c.set_page(2), QueryEffect::Refetch);
        let (token, _) = c.begin_fetch();
        let last = vec![ticket("K", "Karim", "pending")];
        assert_eq!(c.finish_fetch(token, Ok(PageResult::new(last, Some(11)))), FetchOutcome::Applied);

        c.dispatch(RowAction::Delete, "K").unwrap();
        let request = c.confirm_modal().unwrap();
        let outcome = c.complete_mutation(&request, Ok(None), &notifier);

        assert_eq!(outcome, MutationOutcome::Refetch);
        assert_eq!(c.query().page, 1);
        assert_eq!(c.total_items(), 10);
        let (_, query) = c.begin_fetch();
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_delete_with_rows_on_later_pages_refetches() {
        let notifier = RecordingNotifier::default();
        let mut c = loaded(pending(1..=10), Some(11));

        c.dispatch(RowAction::Delete, "3").unwrap();
        let request = c.confirm_modal().unwrap();
        let outcome = c.complete_mutation(&request, Ok(None), &notifier);

        // Row 11 has to move up from page 2.
        assert_eq!(outcome, MutationOutcome::Refetch);
        assert_eq!(c.query().page, 1);
        assert_eq!(c.total_items(), 10);
    }

    #[test]
    fn test_row_leaving_a_verified_filter_is_uncounted() {
        let notifier = RecordingNotifier::default();
        let mut c = ListController::new(&TICKETS, 10);
        assert_eq!(c.set_filter("status", "pending"), QueryEffect::Refetch);
        let (token, _) = c.begin_fetch();
        let rows = vec![
            ticket("A", "Amal", "pending"),
            ticket("B", "Basil", "pending"),
            ticket("C", "Carla", "pending"),
        ];
        c.finish_fetch(token, Ok(PageResult::new(rows, Some(3))));

        let request = status_change(&mut c, RowAction::Close, "A");
        let outcome = c.complete_mutation(&request, Ok(None), &notifier);

        assert_eq!(outcome, MutationOutcome::Applied);
        assert_eq!(ids(&c.visible_rows()), vec!["B", "C"]);
        assert_eq!(c.total_items(), 2);
        assert_eq!(
            c.paginator().range(),
            ItemRange {
                start: 1,
                end: 2,
                total: 2
            }
        );
    }

    #[test]
    fn test_row_leaving_a_verified_filter_refills_a_full_page() {
        let notifier = RecordingNotifier::default();
        let mut c = ListController::new(&TICKETS, 10);
        c.set_filter("status", "pending");
        let (token, _) = c.begin_fetch();
        c.finish_fetch(token, Ok(PageResult::new(pending(1..=10), Some(13))));

        let request = status_change(&mut c, RowAction::Close, "4");
        let outcome = c.complete_mutation(&request, Ok(None), &notifier);

        assert_eq!(outcome, MutationOutcome::Refetch);
        assert_eq!(c.visible_rows().len(), 9);
        assert_eq!(c.total_items(), 12);
    }

    #[test]
    fn test_server_mode_trusts_the_backend_page() {
        let notifier = RecordingNotifier::default();
        let mut c = ListController::new(&SERVER_TICKETS, 10);
        assert_eq!(c.set_filter("status", "pending"), QueryEffect::Refetch);
        let (token, _) = c.begin_fetch();
        let rows = vec![ticket("A", "Amal", "pending"), ticket("B", "Basil", "in-progress")];
        c.finish_fetch(token, Ok(PageResult::new(rows, Some(2))));

        // Not re-filtered locally.
        assert_eq!(ids(&c.visible_rows()), vec!["A", "B"]);

        let request = status_change(&mut c, RowAction::Close, "A");
        assert_eq!(c.complete_mutation(&request, Ok(None), &notifier), MutationOutcome::Applied);
        assert_eq!(ids(&c.visible_rows()), vec!["A", "B"]);
        assert_eq!(c.total_items(), 2);
        assert_eq!(c.set_search("amal"), QueryEffect::Refetch);
    }

    #[test]
    fn test_client_mode_filters_and_pages_resident_rows() {
        let mut c = ListController::new(&LOCAL_TICKETS, 2);
        let (token, query) = c.begin_fetch();
        assert!(query_params(&query, &LOCAL_TICKETS).is_empty());
        let rows = vec![
            ticket("A", "Amal", "pending"),
            ticket("B", "Basil", "in-progress"),
            ticket("C", "Carla", "completed"),
            ticket("D", "Dana", "pending"),
            ticket("E", "Emil", "pending"),
        ];
        c.finish_fetch(token, Ok(PageResult::unpaginated(rows)));
        assert_eq!(c.paginator().total_pages(), 3);

        assert_eq!(c.set_page(3), QueryEffect::Local);
        assert_eq!(ids(&c.visible_rows()), vec!["E"]);

        assert_eq!(c.set_filter("status", "pending"), QueryEffect::Local);
        assert_eq!(c.query().page, 1);
        assert_eq!(ids(&c.visible_rows()), vec!["A", "D"]);
        assert_eq!(c.total_items(), 3);
        assert_eq!(c.paginator().total_pages(), 2);

        assert_eq!(c.set_search("EMIL"), QueryEffect::Local);
        assert_eq!(ids(&c.visible_rows()), vec!["E"]);
        assert_eq!(c.paginator().total_pages(), 1);
        assert!(query_params(c.query(), &LOCAL_TICKETS).is_empty());

        assert_eq!(c.clear_filters(), QueryEffect::Local);
        assert_eq!(c.total_items(), 5);
        assert_eq!(c.loaded_rows().len(), 5);
    }

    #[test]
    fn test_date_range_is_one_query_change() {
        let mut c = loaded(abc(), Some(3));
        assert_eq!(c.set_date_range("2024-03-01", "2024-03-31"), QueryEffect::Refetch);
        assert_eq!(c.query().filter(DATE_FROM), Some("2024-03-01"));
        assert_eq!(c.query().filter(DATE_TO), Some("2024-03-31"));
        assert_eq!(c.set_date_range("2024-03-01", "2024-03-31"), QueryEffect::Unchanged);

        assert_eq!(c.set_date_range("", "2024-03-31"), QueryEffect::Refetch);
        assert_eq!(c.query().filter(DATE_FROM), None);

        let mut local = loaded_in(&LOCAL_TICKETS, abc(), None);
        assert_eq!(local.set_date_range("2024-03-10", ""), QueryEffect::Local);
        assert_eq!(local.visible_rows().len(), 3);
    }

    #[test]
    fn test_loaded_set_stats_ignore_the_filter() {
        let mut c = loaded_in(&LOCAL_TICKETS, abc(), None);
        c.set_filter("status", "pending");
        assert_eq!(c.visible_rows().len(), 1);

        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let stats = c.stats(now);
        assert_eq!(stats.get("total"), 3);
        assert_eq!(stats.get("status.completed"), 1);
    }

    #[test]
    fn test_endpoint_stats_fall_back_to_loaded_rows() {
        let mut c = loaded_in(&SERVER_TICKETS, abc(), Some(40));
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(c.stats(now).get("total"), 3);

        let mut remote = Stats::default();
        remote.insert("total", 40);
        remote.insert("status.pending", 12);
        c.set_endpoint_stats(Ok(Some(remote.clone())));
        assert_eq!(c.stats(now), remote);

        // A failed refresh keeps the last good numbers.
        let err = ListError::fetch(ApiError::new(Some(503), None));
        c.set_endpoint_stats(Err(err));
        assert_eq!(c.stats(now).get("status.pending"), 12);

        c.set_endpoint_stats(Ok(None));
        assert_eq!(c.stats(now).get("total"), 3);
    }

    #[test]
    fn test_failed_mutation_keeps_row_and_reports() {
        let mut c = loaded(abc(), Some(3));
        let notifier = RecordingNotifier::default();

        c.dispatch(RowAction::Delete, "C").unwrap();
        let request = c.confirm_modal().unwrap();
        let err = ListError::mutation(ApiError::new(Some(500), None));
        let outcome = c.complete_mutation(&request, Err(err), &notifier);

        assert_eq!(outcome, MutationOutcome::Failed(GENERIC_MUTATION_MESSAGE.to_string()));
        assert_eq!(c.loaded_rows().len(), 3);
        assert_eq!(c.modal().unwrap().error.as_deref(), Some(GENERIC_MUTATION_MESSAGE));
        assert_eq!(notifier.toasts.borrow()[0].level, ToastLevel::Error);
        assert!(c.cancel_modal());
    }

    #[test]
    fn test_dispatch_unknown_row() {
        let mut c = loaded(abc(), Some(3));
        assert_eq!(
            c.dispatch(RowAction::View, "Z"),
            Err(DispatchError::RowNotFound("Z".to_string()))
        );
    }

    #[test]
    fn test_current_page_stats() {
        let c = loaded(abc(), Some(3));
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let stats = c.stats(now);
        assert_eq!(stats.get("total"), 3);
        assert_eq!(stats.get("status.pending"), 1);
        assert_eq!(stats.get("last_24h"), 3);
    }

    #[tokio::test]
    async fn test_controller_with_fixture_source() {
        let items = (1..=23)
            .map(|i| json!({ "id": i, "name": format!("Guest {}", i), "status": "PENDING" }))
            .collect();
        let source = FixtureSource::new(&TICKETS, items);
        let notifier = RecordingNotifier::default();
        let mut c = ListController::new(&TICKETS, 10);

        let (token, query) = c.begin_fetch();
        let outcome = c.finish_fetch(token, source.fetch(&query).await);
        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(c.paginator().total_pages(), 3);

        assert_eq!(c.set_page(3), QueryEffect::Refetch);
        let (token, query) = c.begin_fetch();
        c.finish_fetch(token, source.fetch(&query).await);
        assert_eq!(c.visible_rows().len(), 3);

        let request = match c.dispatch(RowAction::Close, "21").unwrap() {
            Dispatch::Mutate(request) => request,
            other => panic!("unexpected {:?}", other),
        };
        let result = source.mutate(&request).await;
        c.complete_mutation(&request, result, &notifier);
        let row = c.loaded_rows().iter().find(|r| r.id == "21").unwrap();
        assert_eq!(row.get("status"), Some("completed"));
        assert_eq!(row.get("client_name"), Some("Guest 21"));
    }
}
