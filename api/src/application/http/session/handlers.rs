pub mod complete_onboarding;
pub mod get_session;
pub mod login;
pub mod logout;
pub mod register;
