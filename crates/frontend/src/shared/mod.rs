pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod http;
pub mod i18n;
pub mod icons;
pub mod list_page;
pub mod list_utils;
pub mod modal_frame;
pub mod page_frame;
pub mod page_standard;
pub mod toast;
