pub mod ai;
pub mod analysis;
pub mod dashboard;
pub mod events;
pub mod health;
pub mod meal;
pub mod meal_tolerance;
pub mod plan;
pub mod profile;
pub mod server;
pub mod session;
pub mod store;
pub mod symptom;
