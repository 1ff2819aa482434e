use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, profile::value_objects::UserProfileUpdate,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>, // cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>, // kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
}

impl UserProfile {
    /// Shallow merge of `update` into the profile.
    pub fn merge(&mut self, update: UserProfileUpdate) {
        if let Some(height) = update.height {
            self.height = Some(height);
        }
        if let Some(weight) = update.weight {
            self.weight = Some(weight);
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        if let Some(disease) = update.disease {
            self.disease = Some(disease);
        }
        if let Some(restrictions) = update.dietary_restrictions {
            let mut unique: Vec<String> = Vec::with_capacity(restrictions.len());
            for restriction in restrictions {
                if !unique.contains(&restriction) {
                    unique.push(restriction);
                }
            }
            self.dietary_restrictions = Some(unique);
        }
        if let Some(activity_level) = update.activity_level {
            self.activity_level = Some(activity_level);
        }
    }

    /// AI plans and analyses need at least the disease and the age.
    pub fn ensure_complete(&self) -> Result<(), CoreError> {
        if self.disease.as_deref().is_none_or(|d| d.trim().is_empty()) {
            return Err(CoreError::IncompleteProfile("disease".to_string()));
        }
        if self.age.is_none() {
            return Err(CoreError::IncompleteProfile("age".to_string()));
        }
        Ok(())
    }

    /// Body mass index, when both height and weight are known.
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.height.filter(|h| *h > 0.0)? / 100.0;
        let weight = self.weight.filter(|w| *w > 0.0)?;
        Some((weight / (height_m * height_m) * 10.0).round() / 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn onboarded() -> UserProfile {
        UserProfile {
            height: Some(170.0),
            weight: Some(65.0),
            age: Some(34),
            disease: Some("Crohn's disease".to_string()),
            dietary_restrictions: Some(vec!["Gluten".to_string()]),
            activity_level: Some("Moderately active".to_string()),
        }
    }

    #[test]
    fn test_merge_preserves_absent_fields() {
        let mut profile = onboarded();
        profile.merge(UserProfileUpdate {
            weight: Some(63.5),
            ..Default::default()
        });

        assert_eq!(profile.weight, Some(63.5));
        assert_eq!(profile.height, Some(170.0));
        assert_eq!(profile.age, Some(34));
        assert_eq!(profile.disease.as_deref(), Some("Crohn's disease"));
        assert_eq!(
            profile.dietary_restrictions,
            Some(vec!["Gluten".to_string()])
        );
    }

    #[test]
    fn test_merge_deduplicates_restrictions() {
        let mut profile = UserProfile::default();
        profile.merge(UserProfileUpdate {
            dietary_restrictions: Some(vec![
                "Lactose".to_string(),
                "Gluten".to_string(),
                "Lactose".to_string(),
            ]),
            ..Default::default()
        });

        assert_eq!(
            profile.dietary_restrictions,
            Some(vec!["Lactose".to_string(), "Gluten".to_string()])
        );
    }

    #[test]
    fn test_ensure_complete() {
        assert!(onboarded().ensure_complete().is_ok());

        let missing_age = UserProfile {
            age: None,
            ..onboarded()
        };
        assert_eq!(
            missing_age.ensure_complete(),
            Err(CoreError::IncompleteProfile("age".to_string()))
        );

        let blank_disease = UserProfile {
            disease: Some("  ".to_string()),
            ..onboarded()
        };
        assert!(blank_disease.ensure_complete().is_err());
    }

    #[test]
    fn test_bmi() {
        assert_eq!(onboarded().bmi(), Some(22.5));
        assert_eq!(UserProfile::default().bmi(), None);
    }
}
