pub mod create_meal_tolerance;
pub mod delete_meal_tolerance;
pub mod get_meal_tolerances;
