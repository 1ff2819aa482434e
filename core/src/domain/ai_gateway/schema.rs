use serde_json::json;

/// Example reply shown to the model for nutrition plans.
pub fn nutrition_plan_shape() -> serde_json::Value {
    json!({
        "title": "7-Day Nutrition Plan",
        "description": "A personalised plan for your condition",
        "duration": "7 days",
        "meals": [
            {
                "meal": "Breakfast",
                "foods": ["food 1", "food 2"],
                "calories": 300,
                "notes": "notes"
            }
        ],
        "recommendations": ["recommendation 1", "recommendation 2"]
    })
}

pub fn fitness_plan_shape() -> serde_json::Value {
    json!({
        "title": "7-Day Fitness Plan",
        "description": "A personalised plan for your condition",
        "duration": "7 days",
        "exercises": [
            {
                "name": "exercise name",
                "sets": 3,
                "reps": 10,
                "duration": "15 minutes",
                "notes": "notes"
            }
        ],
        "recommendations": ["recommendation 1", "recommendation 2"]
    })
}

pub fn symptom_analysis_shape() -> serde_json::Value {
    json!({
        "severity": 3,
        "possibleCauses": ["possible cause"],
        "recommendations": ["recommendation"],
        "relatedFoods": ["food to avoid"],
        "warningSigns": ["sign that needs a doctor"]
    })
}

pub fn food_analysis_shape() -> serde_json::Value {
    json!({
        "calories": 250,
        "nutrients": {
            "protein": 10,
            "carbs": 30,
            "fat": 8,
            "fiber": 2
        },
        "suitability": "good | moderate | avoid",
        "recommendations": ["recommendation"],
        "alternatives": ["alternative food"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_name_every_list_field() {
        use crate::domain::ai_gateway::payloads::{
            AiPayload, FitnessPlanPayload, FoodAnalysisPayload, NutritionPlanPayload,
            SymptomAnalysisPayload,
        };

        let pairs = [
            (nutrition_plan_shape(), NutritionPlanPayload::LIST_FIELDS),
            (fitness_plan_shape(), FitnessPlanPayload::LIST_FIELDS),
            (symptom_analysis_shape(), SymptomAnalysisPayload::LIST_FIELDS),
            (food_analysis_shape(), FoodAnalysisPayload::LIST_FIELDS),
        ];

        for (shape, fields) in pairs {
            for field in fields {
                assert!(shape[*field].is_array(), "{field} missing from shape");
            }
        }
    }
}
