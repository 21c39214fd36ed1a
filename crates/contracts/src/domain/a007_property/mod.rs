pub mod schema;

pub use schema::{fixture_source, LISTING_TYPE, PROPERTY_TYPE, SCHEMA};
