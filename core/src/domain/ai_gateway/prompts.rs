use crate::domain::{
    ai_gateway::{schema, value_objects::HealthProfile},
    meal::entities::{Meal, MealTolerance},
    symptom::{entities::Symptom, value_objects::SymptomType},
};

const JSON_ONLY: &str =
    "Reply with a single JSON object in exactly this shape and nothing else (no markdown, no commentary):";

fn joined(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

pub fn nutrition_plan_prompt(profile: &HealthProfile) -> String {
    format!(
        "You are a dietitian specialised in intestinal diseases. Create a 7-day nutrition plan \
         for a {age}-year-old patient with {disease}.\n\n\
         Patient:\n\
         - Disease: {disease}\n\
         - Age: {age}\n\
         - Weight: {weight} kg\n\
         - Height: {height} cm\n\
         - Symptoms: {symptoms}\n\
         - Dietary restrictions: {restrictions}\n\
         - Activity level: {activity}\n\n\
         {JSON_ONLY}\n{shape:#}",
        age = profile.age_label(),
        disease = profile.disease_label(),
        weight = profile.weight,
        height = profile.height,
        symptoms = joined(&profile.symptoms),
        restrictions = joined(&profile.dietary_restrictions),
        activity = profile.activity_level,
        shape = schema::nutrition_plan_shape(),
    )
}

pub fn fitness_plan_prompt(profile: &HealthProfile) -> String {
    format!(
        "You are a fitness coach who works with patients with intestinal diseases. Create a \
         7-day fitness plan for a {age}-year-old patient with {disease}.\n\n\
         Patient:\n\
         - Disease: {disease}\n\
         - Age: {age}\n\
         - Weight: {weight} kg\n\
         - Height: {height} cm\n\
         - Symptoms: {symptoms}\n\
         - Activity level: {activity}\n\n\
         {JSON_ONLY}\n{shape:#}",
        age = profile.age_label(),
        disease = profile.disease_label(),
        weight = profile.weight,
        height = profile.height,
        symptoms = joined(&profile.symptoms),
        activity = profile.activity_level,
        shape = schema::fitness_plan_shape(),
    )
}

pub fn symptom_analysis_prompt(symptoms: &[SymptomType], profile: &HealthProfile) -> String {
    let labels: Vec<String> = symptoms.iter().map(|s| s.label().to_string()).collect();

    format!(
        "You are a gastroenterologist. Analyse the symptoms of a patient with {disease}.\n\n\
         Patient:\n\
         - Disease: {disease}\n\
         - Age: {age}\n\
         - Symptoms: {symptoms}\n\n\
         \"severity\" is an integer from 1 (mild) to 5 (severe).\n\
         {JSON_ONLY}\n{shape:#}",
        disease = profile.disease_label(),
        age = profile.age_label(),
        symptoms = joined(&labels),
        shape = schema::symptom_analysis_shape(),
    )
}

pub fn food_analysis_prompt(food_name: &str, amount: &str) -> String {
    format!(
        "Calculate the calories and nutrients of {amount} of {food_name}. Nutrients are in grams.\n\n\
         {JSON_ONLY}\n{shape:#}",
        shape = schema::food_analysis_shape(),
    )
}

pub fn health_insights_prompt(
    profile: &HealthProfile,
    recent_meals: &[Meal],
    recent_symptoms: &[Symptom],
) -> String {
    let meals: Vec<String> = recent_meals.iter().map(|m| m.name.clone()).collect();
    let symptoms: Vec<String> = recent_symptoms
        .iter()
        .map(|s| s.symptom_type.to_string())
        .collect();

    format!(
        "You are a gastroenterologist. Give general health advice to a patient with {disease}.\n\n\
         Patient:\n\
         - Disease: {disease}\n\
         - Age: {age}\n\
         - Recent meals: {meals}\n\
         - Recent symptoms: {symptoms}\n\n\
         Write one personalised recommendation per line.",
        disease = profile.disease_label(),
        age = profile.age_label(),
        meals = joined(&meals),
        symptoms = joined(&symptoms),
    )
}

pub fn food_tolerance_prompt(
    food_name: &str,
    history: &[MealTolerance],
    profile: &HealthProfile,
) -> String {
    let history = if history.is_empty() {
        "none".to_string()
    } else {
        history
            .iter()
            .map(|t| {
                format!(
                    "{}: {} - {}",
                    t.food_name,
                    if t.tolerated { "tolerated" } else { "not tolerated" },
                    joined(&t.symptoms)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "You are a gastroenterologist. Analyse how well a patient with {disease} tolerates \
         {food_name}.\n\n\
         Patient:\n\
         - Disease: {disease}\n\
         - Age: {age}\n\n\
         Tolerance history:\n{history}\n\n\
         Give recommendations for this food, one per line.",
        disease = profile.disease_label(),
        age = profile.age_label(),
    )
}

pub fn chat_prompt(message: &str, context: Option<&str>) -> String {
    match context.filter(|c| !c.trim().is_empty()) {
        Some(context) => format!("Context: {context}\n\nUser: {message}\n\nAssistant:"),
        None => format!("User: {message}\n\nAssistant:"),
    }
}
