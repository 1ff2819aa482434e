use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Symptom or reaction intensity on a 1 (mild) to 5 (severe) scale.
///
/// Construction always clamps: values above 5 become 5 and values below 1
/// become 1. Deserialization accepts any JSON number and rounds it before
/// clamping, so a persisted or AI-provided `4.6` reads back as `5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
#[serde(transparent)]
pub struct Severity(u8);

impl Severity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn from_score(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self::clamped(value.round() as i64)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 | 2 => "mild",
            3 => "moderate",
            _ => "severe",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self(3)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Ok(Self::from_score(raw))
    }
}
