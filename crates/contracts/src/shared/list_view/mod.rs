//! Generic list-view engine shared by every list and dashboard page.

pub mod controller;
pub mod debounce;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod merge;
pub mod normalize;
pub mod notify;
pub mod page;
pub mod paginator;
pub mod query;
pub mod request_guard;
pub mod row;
pub mod schema;
pub mod scroll_lock;
pub mod source;
pub mod stats;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{FetchOutcome, ListController, MutationOutcome, QueryEffect};
pub use debounce::{DebounceTicket, Debouncer, DEFAULT_DEBOUNCE_MS};
pub use dispatcher::{
    ActionDispatcher, Dispatch, DispatchError, ModalKind, ModalPhase, ModalState, MutationKind,
    MutationRequest, RowAction,
};
pub use error::{ApiError, ListError};
pub use notify::{Notifier, Toast, ToastLevel};
pub use page::PageResult;
pub use paginator::{ItemRange, Paginator, DEFAULT_PAGE_SIZE_OPTIONS};
pub use query::{QueryState, SortSpec, FILTER_ALL};
pub use request_guard::{RequestGuard, RequestToken};
pub use row::Row;
pub use schema::{EntitySchema, FieldKind, FieldSpec, FilterMode, StatsScope};
pub use scroll_lock::ScrollLock;
pub use source::{ApiRequest, DataSource, FixtureSource, HttpTransport, Method, RestSource};
pub use stats::Stats;
pub use status::Vocabulary;
