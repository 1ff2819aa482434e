pub mod api_error;
pub mod datetime;
pub mod list_params;
pub mod response;
