pub mod create_meal;
pub mod delete_meal;
pub mod get_meals;
