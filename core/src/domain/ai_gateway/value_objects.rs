use serde::Serialize;

use crate::domain::profile::entities::UserProfile;

pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_ACTIVITY_LEVEL: &str = "Lightly active";

/// Profile facts sent along with every prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthProfile {
    pub disease: String,
    pub age: Option<u32>,
    pub weight: f64,
    pub height: f64,
    pub symptoms: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub activity_level: String,
}

impl HealthProfile {
    pub fn with_symptoms(mut self, symptoms: Vec<String>) -> Self {
        self.symptoms = symptoms;
        self
    }

    pub fn age_label(&self) -> String {
        self.age
            .map(|age| age.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    pub fn disease_label(&self) -> &str {
        if self.disease.trim().is_empty() {
            "a digestive condition"
        } else {
            &self.disease
        }
    }
}

impl From<&UserProfile> for HealthProfile {
    fn from(profile: &UserProfile) -> Self {
        Self {
            disease: profile.disease.clone().unwrap_or_default(),
            age: profile.age,
            weight: profile.weight.unwrap_or(DEFAULT_WEIGHT_KG),
            height: profile.height.unwrap_or(DEFAULT_HEIGHT_CM),
            symptoms: Vec::new(),
            dietary_restrictions: profile.dietary_restrictions.clone().unwrap_or_default(),
            activity_level: profile
                .activity_level
                .clone()
                .unwrap_or_else(|| DEFAULT_ACTIVITY_LEVEL.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    Parsed,
    Fallback,
}

/// A gateway result together with how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled<T> {
    pub value: T,
    pub outcome: CallOutcome,
}

impl<T> Reconciled<T> {
    pub fn parsed(value: T) -> Self {
        Self {
            value,
            outcome: CallOutcome::Parsed,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            outcome: CallOutcome::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.outcome == CallOutcome::Fallback
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_measurements() {
        let profile = UserProfile {
            age: Some(52),
            disease: Some("Celiac disease".to_string()),
            ..Default::default()
        };

        let health = HealthProfile::from(&profile);
        assert_eq!(health.weight, 70.0);
        assert_eq!(health.height, 170.0);
        assert_eq!(health.activity_level, "Lightly active");
        assert!(health.dietary_restrictions.is_empty());
        assert_eq!(health.age_label(), "52");
    }

    #[test]
    fn test_disease_label_without_disease() {
        let health = HealthProfile::from(&UserProfile::default());
        assert_eq!(health.disease_label(), "a digestive condition");
        assert_eq!(health.age_label(), "unknown");
    }
}
