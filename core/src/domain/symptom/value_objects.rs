use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Known intestinal symptom codes. Codes outside the list are kept verbatim
/// in `Other` so older or newer clients never lose data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SymptomType {
    Bloating,
    Cramps,
    Diarrhea,
    Constipation,
    Nausea,
    Gas,
    Pain,
    Discomfort,
    Heartburn,
    LossOfAppetite,
    Other(String),
}

impl SymptomType {
    pub const KNOWN: [SymptomType; 10] = [
        SymptomType::Bloating,
        SymptomType::Cramps,
        SymptomType::Diarrhea,
        SymptomType::Constipation,
        SymptomType::Nausea,
        SymptomType::Gas,
        SymptomType::Pain,
        SymptomType::Discomfort,
        SymptomType::Heartburn,
        SymptomType::LossOfAppetite,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SymptomType::Bloating => "bloating",
            SymptomType::Cramps => "cramps",
            SymptomType::Diarrhea => "diarrhea",
            SymptomType::Constipation => "constipation",
            SymptomType::Nausea => "nausea",
            SymptomType::Gas => "gas",
            SymptomType::Pain => "pain",
            SymptomType::Discomfort => "discomfort",
            SymptomType::Heartburn => "heartburn",
            SymptomType::LossOfAppetite => "loss_of_appetite",
            SymptomType::Other(code) => code,
        }
    }

    /// Human readable label used in prompts.
    pub fn label(&self) -> &str {
        match self {
            SymptomType::Bloating => "Bloating",
            SymptomType::Cramps => "Cramps",
            SymptomType::Diarrhea => "Diarrhea",
            SymptomType::Constipation => "Constipation",
            SymptomType::Nausea => "Nausea",
            SymptomType::Gas => "Gas",
            SymptomType::Pain => "Pain",
            SymptomType::Discomfort => "Discomfort",
            SymptomType::Heartburn => "Heartburn",
            SymptomType::LossOfAppetite => "Loss of appetite",
            SymptomType::Other(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SymptomType::Other(_))
    }
}

impl FromStr for SymptomType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Ok(SymptomType::KNOWN
            .iter()
            .find(|known| known.as_str() == normalized)
            .cloned()
            .unwrap_or_else(|| SymptomType::Other(s.trim().to_string())))
    }
}

impl From<String> for SymptomType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(symptom_type) => symptom_type,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for SymptomType {
    fn from(value: &str) -> Self {
        SymptomType::from(value.to_string())
    }
}

impl From<SymptomType> for String {
    fn from(value: SymptomType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SymptomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(SymptomType::from("bloating"), SymptomType::Bloating);
        assert_eq!(SymptomType::from("Loss of appetite"), SymptomType::LossOfAppetite);
        assert_eq!(SymptomType::from("HEARTBURN"), SymptomType::Heartburn);
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let symptom_type = SymptomType::from("reflux");
        assert_eq!(symptom_type, SymptomType::Other("reflux".to_string()));
        assert!(!symptom_type.is_known());
        assert_eq!(
            serde_json::to_string(&symptom_type).unwrap(),
            "\"reflux\""
        );
    }

    #[test]
    fn test_serde_uses_snake_case_codes() {
        let json = serde_json::to_string(&SymptomType::LossOfAppetite).unwrap();
        assert_eq!(json, "\"loss_of_appetite\"");
        let parsed: SymptomType = serde_json::from_str("\"cramps\"").unwrap();
        assert_eq!(parsed, SymptomType::Cramps);
    }
}
