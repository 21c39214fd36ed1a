pub mod config;
pub mod i18n;
pub mod list_view;
pub mod validation;
