pub mod ai_gateway;
pub mod analysis;
pub mod assistant;
pub mod common;
pub mod dashboard;
pub mod health_store;
pub mod meal;
pub mod plan;
pub mod profile;
pub mod session;
pub mod storage;
pub mod symptom;
