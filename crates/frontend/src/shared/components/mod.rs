pub mod date_range_picker;
pub mod filter_panel;
pub mod pagination_controls;
pub mod sortable_header_cell;
pub mod stat_card;
pub mod status_badge;

pub use date_range_picker::DateRangePicker;
pub use filter_panel::FilterPanel;
pub use pagination_controls::PaginationControls;
pub use sortable_header_cell::SortableHeaderCell;
pub use stat_card::{CardTone, StatCard};
pub use status_badge::StatusBadge;
