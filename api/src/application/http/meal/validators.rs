use chrono::{DateTime, Utc};
use gutcare_core::domain::meal::entities::{MealType, NewMeal};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::datetime::deserialize_optional_datetime;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// Leave at 0 when calories were not calculated.
    #[serde(default)]
    pub calories: f64,

    pub meal_type: MealType,

    #[serde(default)]
    pub foods: Vec<String>,

    #[serde(default)]
    #[schema(example = "250 g")]
    pub amount: String,

    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub date: Option<DateTime<Utc>>,
}

impl From<CreateMealValidator> for NewMeal {
    fn from(payload: CreateMealValidator) -> Self {
        Self {
            name: payload.name,
            calories: payload.calories,
            date: payload.date.unwrap_or_else(Utc::now),
            meal_type: payload.meal_type,
            foods: payload.foods,
            amount: payload.amount,
        }
    }
}
