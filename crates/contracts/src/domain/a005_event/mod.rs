pub mod schema;

pub use schema::{EVENT_STATUS, REGISTRATIONS, REGISTRATIONS_SEGMENT, SCHEMA};
