pub mod a001_user;
pub mod a002_booking;
pub mod a003_inquiry;
pub mod a004_concierge_request;
pub mod a005_event;
pub mod a006_partner;
pub mod a007_property;

use crate::shared::list_page::ListPageSpec;

/// Every list page of the app.
pub fn all_list_pages() -> [&'static ListPageSpec; 7] {
    [
        &a001_user::ui::list::USERS_LIST,
        &a002_booking::ui::list::BOOKINGS_LIST,
        &a003_inquiry::ui::list::INQUIRIES_LIST,
        &a004_concierge_request::ui::list::TICKETS_LIST,
        &a005_event::ui::list::EVENTS_LIST,
        &a006_partner::ui::list::PARTNERS_LIST,
        &a007_property::ui::list::PROPERTIES_LIST,
    ]
}

/// List page by schema name (`"tickets"`, `"users"`, ...).
pub fn list_page_spec(name: &str) -> Option<ListPageSpec> {
    all_list_pages()
        .into_iter()
        .find(|spec| spec.schema.name == name)
        .copied()
}
