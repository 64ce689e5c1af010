//! User Identity Value Object
//!
//! Provider-supplied identity captured when the session is minted. Immutable
//! for the life of the session record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Stable provider subject (`sub` for OpenID Connect, `id` for Google v2)
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            name: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_attributes_are_omitted() {
        let json = serde_json::to_value(UserIdentity::new("u1").with_email("a@b.com")).unwrap();
        assert_eq!(json, serde_json::json!({"id": "u1", "email": "a@b.com"}));
    }
}
