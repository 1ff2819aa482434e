use chrono::NaiveDate;

use crate::domain::{
    dashboard::entities::{CollectionCounts, DashboardSummary},
    health_store::entities::HealthState,
    plan::entities::PlanType,
};

const RECENT: usize = 3;

fn last<T: Clone>(items: &[T]) -> Vec<T> {
    items[items.len().saturating_sub(RECENT)..].to_vec()
}

/// Ties go to the code logged first.
fn most_frequent_symptom(state: &HealthState) -> Option<String> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for symptom in &state.symptoms {
        let code = symptom.symptom_type.as_str();
        match tally.iter_mut().find(|(c, _)| *c == code) {
            Some((_, count)) => *count += 1,
            None => tally.push((code, 1)),
        }
    }

    tally
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, (code, count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((code, count)),
        })
        .map(|(code, _)| code.to_string())
}

pub fn summarize(state: &HealthState, today: NaiveDate) -> DashboardSummary {
    let average_calories = if state.meals.is_empty() {
        0.0
    } else {
        let total: f64 = state.meals.iter().map(|m| m.calories).sum();
        (total / state.meals.len() as f64).round()
    };

    let today_calories = state
        .meals
        .iter()
        .filter(|m| m.date.date_naive() == today)
        .map(|m| m.calories)
        .sum();

    let plans_of = |plan_type: PlanType| {
        state
            .health_plans
            .iter()
            .filter(|p| p.plan_type == plan_type)
            .count()
    };

    DashboardSummary {
        profile: state.user_profile.clone(),
        counts: CollectionCounts {
            symptoms: state.symptoms.len(),
            meals: state.meals.len(),
            health_plans: state.health_plans.len(),
            nutrition_plans: state.nutrition_plans.len(),
            fitness_plans: state.fitness_plans.len(),
            meal_tolerances: state.meal_tolerances.len(),
            symptom_analyses: state.symptom_analyses.len(),
            food_analyses: state.food_analyses.len(),
        },
        average_calories,
        today_calories,
        recent_symptoms: last(&state.symptoms),
        recent_meals: last(&state.meals),
        diet_plans: plans_of(PlanType::Diet),
        fitness_plans: plans_of(PlanType::Fitness),
        most_frequent_symptom: most_frequent_symptom(state),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::value_objects::Severity,
        meal::entities::{Meal, MealType},
        plan::entities::HealthPlan,
        symptom::{entities::Symptom, value_objects::SymptomType},
    };

    fn meal(calories: f64, day: u32) -> Meal {
        Meal {
            id: Uuid::new_v4(),
            name: "Meal".to_string(),
            calories,
            date: Utc.with_ymd_and_hms(2025, 5, day, 12, 0, 0).unwrap(),
            meal_type: MealType::Lunch,
            foods: Vec::new(),
            amount: String::new(),
        }
    }

    fn symptom(code: &str) -> Symptom {
        Symptom {
            id: Uuid::new_v4(),
            symptom_type: SymptomType::from(code),
            severity: Severity::default(),
            date: Utc::now(),
            notes: String::new(),
        }
    }

    fn plan(plan_type: PlanType) -> HealthPlan {
        HealthPlan {
            id: Uuid::new_v4(),
            plan_type,
            title: "Plan".to_string(),
            description: String::new(),
            duration: "7 days".to_string(),
            created: Utc::now(),
        }
    }

    #[test]
    fn test_empty_state() {
        let summary = summarize(&HealthState::default(), NaiveDate::from_ymd_opt(2025, 5, 2).unwrap());

        assert_eq!(summary.average_calories, 0.0);
        assert_eq!(summary.today_calories, 0.0);
        assert!(summary.recent_meals.is_empty());
        assert_eq!(summary.most_frequent_symptom, None);
        assert_eq!(summary.counts, CollectionCounts::default());
    }

    #[test]
    fn test_calorie_figures() {
        let state = HealthState {
            meals: vec![meal(300.0, 1), meal(450.0, 2), meal(125.0, 2), meal(0.0, 2)],
            ..Default::default()
        };

        let summary = summarize(&state, NaiveDate::from_ymd_opt(2025, 5, 2).unwrap());

        assert_eq!(summary.average_calories, 219.0);
        assert_eq!(summary.today_calories, 575.0);
        assert_eq!(summary.recent_meals.len(), 3);
        assert_eq!(summary.recent_meals[0].calories, 450.0);
        assert_eq!(summary.counts.meals, 4);
    }

    #[test]
    fn test_plans_and_symptom_frequency() {
        let state = HealthState {
            symptoms: vec![
                symptom("gas"),
                symptom("bloating"),
                symptom("bloating"),
                symptom("gas"),
                symptom("pain"),
            ],
            health_plans: vec![
                plan(PlanType::Diet),
                plan(PlanType::Fitness),
                plan(PlanType::Diet),
            ],
            ..Default::default()
        };

        let summary = summarize(&state, NaiveDate::from_ymd_opt(2025, 5, 2).unwrap());

        assert_eq!(summary.diet_plans, 2);
        assert_eq!(summary.fitness_plans, 1);
        assert_eq!(summary.most_frequent_symptom.as_deref(), Some("gas"));
        assert_eq!(summary.recent_symptoms.len(), 3);
    }
}
