pub mod chat;
pub mod get_insights;
pub mod get_tolerance_advice;
