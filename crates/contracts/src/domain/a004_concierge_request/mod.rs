pub mod form;
pub mod schema;

pub use form::{new_request_draft, validate_request, REQUEST_FORM_FIELDS};
pub use schema::{PRIORITY, SCHEMA, SERVICE_TYPE, TICKET_STATUS};
