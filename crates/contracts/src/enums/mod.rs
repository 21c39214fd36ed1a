pub mod user_role;
