pub mod schema;

pub use schema::{INQUIRY_STATUS, SCHEMA};
