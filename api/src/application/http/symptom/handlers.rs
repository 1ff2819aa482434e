pub mod create_symptom;
pub mod delete_symptom;
pub mod get_symptoms;
