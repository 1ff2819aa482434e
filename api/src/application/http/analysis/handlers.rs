pub mod delete_analysis;
pub mod generate_food_analysis;
pub mod generate_symptom_analysis;
pub mod get_analyses;
