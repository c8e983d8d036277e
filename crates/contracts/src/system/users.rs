use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{Endpoints, Identifiable, Resource};

/// Registered shop user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
    #[serde(untagged)]
    Other(String),
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
            UserRole::Other(s) => s,
        }
    }
}

impl Identifiable for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for User {
    type Item = User;
    const ENDPOINTS: Endpoints = Endpoints::read_only("/auth");
    const SINGULAR: &'static str = "User";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles() {
        let u: User =
            serde_json::from_str(r#"{"_id":"u1","name":"A","email":"a@b.co","role":"admin"}"#)
                .unwrap();
        assert_eq!(u.role, UserRole::Admin);
        let u: User = serde_json::from_str(r#"{"_id":"u2","role":"editor"}"#).unwrap();
        assert_eq!(u.role.as_str(), "editor");
    }
}
