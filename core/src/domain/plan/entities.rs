use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Diet,
    Fitness,
}

/// Generic plan card shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthPlan {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub plan_type: PlanType,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewHealthPlan {
    pub plan_type: PlanType,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub created: DateTime<Utc>,
}

impl HealthPlan {
    pub fn new(id: Uuid, input: NewHealthPlan) -> Self {
        Self {
            id,
            plan_type: input.plan_type,
            title: input.title,
            description: input.description,
            duration: input.duration,
            created: input.created,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    #[serde(default)]
    pub meal: String,
    #[serde(default)]
    pub foods: Vec<String>,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub sets: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub reps: u32,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub notes: String,
}

/// Reads a set or rep count from whatever the model wrote.
///
/// Numbers are rounded and floored at zero, text yields its first integer
/// (`"10-12"` is 10), and anything else counts as zero.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_f64()
            .filter(|n| n.is_finite())
            .map_or(0, |n| n.round().clamp(0.0, u32::MAX as f64) as u32),
        Value::String(text) => leading_integer(&text),
        _ => 0,
    };
    Ok(count)
}

fn leading_integer(text: &str) -> u32 {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Plan content without identity; what the store receives in `add`.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionPlanDraft {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub meals: Vec<PlannedMeal>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPlan {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub meals: Vec<PlannedMeal>,
    pub recommendations: Vec<String>,
    pub created: DateTime<Utc>,
}

impl NutritionPlan {
    pub fn new(id: Uuid, draft: NutritionPlanDraft, created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            duration: draft.duration,
            meals: draft.meals,
            recommendations: draft.recommendations,
            created,
        }
    }

    /// Fresh plan with its own id, as returned by the AI gateway.
    pub fn generated(draft: NutritionPlanDraft) -> Self {
        Self::new(generate_uuid_v7(), draft, Utc::now())
    }

    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(|m| m.calories).sum()
    }
}

impl From<NutritionPlan> for NutritionPlanDraft {
    fn from(plan: NutritionPlan) -> Self {
        Self {
            title: plan.title,
            description: plan.description,
            duration: plan.duration,
            meals: plan.meals,
            recommendations: plan.recommendations,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FitnessPlanDraft {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub exercises: Vec<PlannedExercise>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FitnessPlan {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub exercises: Vec<PlannedExercise>,
    pub recommendations: Vec<String>,
    pub created: DateTime<Utc>,
}

impl FitnessPlan {
    pub fn new(id: Uuid, draft: FitnessPlanDraft, created: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            duration: draft.duration,
            exercises: draft.exercises,
            recommendations: draft.recommendations,
            created,
        }
    }

    pub fn generated(draft: FitnessPlanDraft) -> Self {
        Self::new(generate_uuid_v7(), draft, Utc::now())
    }
}

impl From<FitnessPlan> for FitnessPlanDraft {
    fn from(plan: FitnessPlan) -> Self {
        Self {
            title: plan.title,
            description: plan.description,
            duration: plan.duration,
            exercises: plan.exercises,
            recommendations: plan.recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(json: &str) -> PlannedExercise {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_counts_accept_ranges_and_floats() {
        let parsed = exercise(r#"{"name":"Squat","sets":3.0,"reps":"10-12"}"#);
        assert_eq!(parsed.sets, 3);
        assert_eq!(parsed.reps, 10);
    }

    #[test]
    fn test_counts_fall_back_to_zero() {
        let parsed = exercise(r#"{"name":"Walk","sets":null,"reps":"as many as you can"}"#);
        assert_eq!(parsed.sets, 0);
        assert_eq!(parsed.reps, 0);

        let parsed = exercise(r#"{"name":"Plank","sets":-2,"reps":"about 8 reps"}"#);
        assert_eq!(parsed.sets, 0);
        assert_eq!(parsed.reps, 8);

        let parsed = exercise(r#"{"name":"Stretch"}"#);
        assert_eq!(parsed.sets, 0);
        assert_eq!(parsed.reps, 0);
    }

    #[test]
    fn test_counts_round_trip_as_integers() {
        let parsed = exercise(r#"{"name":"Lunge","sets":2.6,"reps":12}"#);
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["sets"], 3);
        assert_eq!(json["reps"], 12);
    }
}
