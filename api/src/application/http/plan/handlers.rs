pub mod create_fitness_plan;
pub mod create_health_plan;
pub mod create_nutrition_plan;
pub mod delete_plan;
pub mod generate_fitness_plan;
pub mod generate_nutrition_plan;
pub mod get_plans;
