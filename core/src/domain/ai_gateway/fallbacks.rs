use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    ai_gateway::value_objects::HealthProfile,
    analysis::entities::{FoodAnalysisDraft, Nutrients, Suitability, SymptomAnalysisDraft},
    common::value_objects::Severity,
    plan::entities::{FitnessPlanDraft, NutritionPlanDraft, PlannedExercise, PlannedMeal},
    symptom::value_objects::SymptomType,
};

pub const INSIGHTS_UNAVAILABLE: &str =
    "Health insights are unavailable right now. Please try again later.";
pub const TOLERANCE_UNAVAILABLE: &str =
    "Tolerance analysis is unavailable right now. Please try again later.";
pub const CHAT_UNAVAILABLE: &str =
    "Sorry, I can't answer right now. Please try again later.";

/// kcal per 100 g, matched against the lower-cased food name. More specific
/// entries come first.
const KCAL_PER_100G: &[(&str, f64)] = &[
    ("chicken breast", 165.0),
    ("chicken", 165.0),
    ("salmon", 208.0),
    ("fish", 200.0),
    ("meat", 250.0),
    ("egg", 155.0),
    ("milk", 42.0),
    ("yogurt", 59.0),
    ("rice", 130.0),
    ("bread", 265.0),
    ("apple", 52.0),
    ("banana", 89.0),
    ("broccoli", 34.0),
    ("carrot", 41.0),
    ("almond", 164.0),
    ("olive oil", 884.0),
    ("lentil", 116.0),
    ("soup", 100.0),
];

const UNKNOWN_FOOD_KCAL: f64 = 150.0;
const DEFAULT_GRAMS: f64 = 100.0;

static AMOUNT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:[.,]\d+)?").expect("amount pattern is valid"));

fn condition(profile: &HealthProfile) -> String {
    if profile.disease.trim().is_empty() {
        "your digestive health".to_string()
    } else {
        profile.disease.clone()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn nutrition_plan(profile: &HealthProfile) -> NutritionPlanDraft {
    let meal = |name: &str, foods: &[&str], calories: f64, notes: &str| PlannedMeal {
        meal: name.to_string(),
        foods: strings(foods),
        calories,
        notes: notes.to_string(),
    };

    NutritionPlanDraft {
        title: "7-Day Gentle Nutrition Plan".to_string(),
        description: format!(
            "An easy-to-digest plan built around low-irritant foods for {}.",
            condition(profile)
        ),
        duration: "7 days".to_string(),
        meals: vec![
            meal(
                "Breakfast",
                &["Oatmeal with banana", "Lactose-free yogurt"],
                350.0,
                "Eat slowly and chew well.",
            ),
            meal(
                "Lunch",
                &["Grilled chicken breast", "White rice", "Steamed carrots"],
                550.0,
                "Keep portions moderate.",
            ),
            meal(
                "Dinner",
                &["Baked salmon", "Mashed potatoes", "Cooked zucchini"],
                500.0,
                "Finish eating at least three hours before bed.",
            ),
            meal(
                "Snack",
                &["Rice crackers", "A handful of almonds"],
                200.0,
                "Skip the almonds if nuts trigger symptoms.",
            ),
        ],
        recommendations: strings(&[
            "Drink at least 8 glasses of water a day.",
            "Prefer cooked vegetables over raw ones.",
            "Avoid fried, spicy and very fatty foods.",
            "Keep a food diary to spot trigger foods.",
        ]),
    }
}

pub fn fitness_plan(profile: &HealthProfile) -> FitnessPlanDraft {
    let exercise = |name: &str, sets: u32, reps: u32, duration: &str, notes: &str| {
        PlannedExercise {
            name: name.to_string(),
            sets,
            reps,
            duration: duration.to_string(),
            notes: notes.to_string(),
        }
    };

    FitnessPlanDraft {
        title: "7-Day Low-Impact Fitness Plan".to_string(),
        description: format!(
            "Gentle movement that supports digestion without straining the abdomen, adapted to {}.",
            condition(profile)
        ),
        duration: "7 days".to_string(),
        exercises: vec![
            exercise("Brisk walking", 1, 1, "20 minutes", "Keep a pace where you can still talk."),
            exercise("Gentle yoga", 1, 1, "15 minutes", "Child's pose and cat-cow ease bloating."),
            exercise(
                "Diaphragmatic breathing",
                3,
                10,
                "5 minutes",
                "Breathe in through the nose, let the belly rise.",
            ),
            exercise("Pelvic tilts", 2, 12, "5 minutes", "Stop if you feel abdominal pain."),
        ],
        recommendations: strings(&[
            "Exercise at least an hour after eating.",
            "Rest on days with a flare-up.",
            "Stay hydrated before and after exercising.",
        ]),
    }
}

pub fn symptom_analysis(symptoms: &[SymptomType]) -> SymptomAnalysisDraft {
    SymptomAnalysisDraft {
        symptoms: symptoms.to_vec(),
        severity: Severity::default(),
        possible_causes: strings(&[
            "A recent trigger food or large meal",
            "Stress or irregular sleep",
            "Changes in the underlying condition",
        ]),
        recommendations: strings(&[
            "Keep logging symptoms and meals to find patterns.",
            "Eat smaller, more frequent meals.",
            "Stay hydrated and rest.",
        ]),
        related_foods: strings(&[
            "Fried and fatty foods",
            "Spicy foods",
            "Carbonated drinks",
            "Dairy products",
        ]),
        warning_signs: strings(&[
            "Blood in the stool",
            "High fever",
            "Severe or worsening abdominal pain",
            "Unintended weight loss",
        ]),
    }
}

fn kcal_per_100g(food_name: &str) -> f64 {
    let name = food_name.to_lowercase();
    KCAL_PER_100G
        .iter()
        .find(|(food, _)| name.contains(food))
        .map(|(_, kcal)| *kcal)
        .unwrap_or(UNKNOWN_FOOD_KCAL)
}

fn grams(amount: &str) -> f64 {
    AMOUNT_NUMBER
        .find(amount)
        .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
        .filter(|g| *g > 0.0)
        .unwrap_or(DEFAULT_GRAMS)
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Offline estimate of a food's calories and macro-nutrients.
pub fn food_analysis(food_name: &str, amount: &str) -> FoodAnalysisDraft {
    let grams = grams(amount);
    let calories = (grams * kcal_per_100g(food_name) / 100.0).round();

    FoodAnalysisDraft {
        food_name: food_name.to_string(),
        amount: amount.to_string(),
        calories,
        nutrients: Nutrients {
            protein: one_decimal(calories * 0.20 / 4.0),
            carbs: one_decimal(calories * 0.50 / 4.0),
            fat: one_decimal(calories * 0.30 / 9.0),
            fiber: one_decimal(grams * 2.0 / 100.0),
        },
        suitability: Suitability::Moderate,
        recommendations: strings(&[
            "This is an offline estimate; check the label for exact values.",
            "Watch how you feel after eating it and log any symptoms.",
        ]),
        alternatives: strings(&["Steamed vegetables", "White rice", "Baked fish"]),
    }
}
