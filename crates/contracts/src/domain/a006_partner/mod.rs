pub mod schema;

pub use schema::{PARTNER_TYPE, SCHEMA, VERIFICATION_STATUS};
