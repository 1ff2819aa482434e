use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::stable_hash;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Same email, same id.
    pub fn new(email: &str, name: String) -> Self {
        let email = email.trim().to_lowercase();
        Self {
            id: stable_hash(&email),
            email,
            name,
            avatar: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub needs_onboarding: bool,
}
