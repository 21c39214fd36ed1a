pub mod schema;

pub use schema::{SCHEMA, USER_ROLE, USER_STATUS};
