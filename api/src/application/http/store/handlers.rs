pub mod clear_store;
pub mod get_store;
