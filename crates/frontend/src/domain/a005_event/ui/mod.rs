pub mod list;
pub mod registrations;
