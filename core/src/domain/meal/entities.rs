use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::value_objects::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub date: DateTime<Utc>,
    pub meal_type: MealType,
    #[serde(default)]
    pub foods: Vec<String>,
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, Clone)]
pub struct NewMeal {
    pub name: String,
    pub calories: f64,
    pub date: DateTime<Utc>,
    pub meal_type: MealType,
    pub foods: Vec<String>,
    pub amount: String,
}

impl Meal {
    pub fn new(id: Uuid, input: NewMeal) -> Self {
        // Calories stay 0 when the calculation step was skipped.
        let calories = if input.calories.is_finite() && input.calories > 0.0 {
            input.calories
        } else {
            0.0
        };

        Self {
            id,
            name: input.name,
            calories,
            date: input.date,
            meal_type: input.meal_type,
            foods: input.foods,
            amount: input.amount,
        }
    }
}

/// How a food sat with the user. Linked to meals by `food_name` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealTolerance {
    pub id: Uuid,
    pub food_name: String,
    pub tolerated: bool,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[schema(value_type = u8, minimum = 1, maximum = 5)]
    pub severity: Severity,
    #[serde(default)]
    pub notes: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMealTolerance {
    pub food_name: String,
    pub tolerated: bool,
    pub symptoms: Vec<String>,
    pub severity: i64,
    pub notes: String,
    pub date: DateTime<Utc>,
}

impl MealTolerance {
    pub fn new(id: Uuid, input: NewMealTolerance) -> Self {
        Self {
            id,
            food_name: input.food_name,
            tolerated: input.tolerated,
            symptoms: input.symptoms,
            severity: Severity::clamped(input.severity),
            notes: input.notes,
            date: input.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch(calories: f64) -> NewMeal {
        NewMeal {
            name: "Lentil soup".to_string(),
            calories,
            date: Utc::now(),
            meal_type: MealType::Lunch,
            foods: vec!["lentil soup".to_string()],
            amount: "300 g".to_string(),
        }
    }

    #[test]
    fn test_negative_or_nan_calories_become_zero() {
        assert_eq!(Meal::new(Uuid::nil(), lunch(-40.0)).calories, 0.0);
        assert_eq!(Meal::new(Uuid::nil(), lunch(f64::NAN)).calories, 0.0);
        assert_eq!(Meal::new(Uuid::nil(), lunch(348.0)).calories, 348.0);
    }

    #[test]
    fn test_meal_type_serializes_lowercase() {
        let meal = Meal::new(Uuid::nil(), lunch(0.0));
        let value = serde_json::to_value(&meal).unwrap();
        assert_eq!(value["mealType"], "lunch");
    }

    #[test]
    fn test_tolerance_severity_is_clamped() {
        let tolerance = MealTolerance::new(
            Uuid::nil(),
            NewMealTolerance {
                food_name: "Milk".to_string(),
                tolerated: false,
                symptoms: vec!["bloating".to_string()],
                severity: 11,
                notes: String::new(),
                date: Utc::now(),
            },
        );
        assert_eq!(tolerance.severity.value(), 5);
    }
}
