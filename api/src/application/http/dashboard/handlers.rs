pub mod get_dashboard;
