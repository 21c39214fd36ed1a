pub mod schema;

pub use schema::{BOOKING_STATUS, SCHEMA};
