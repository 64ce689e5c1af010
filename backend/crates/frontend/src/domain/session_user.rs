//! Session User
//!
//! Identity returned by the Auth Service for a live session.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl SessionUser {
    /// Best human-readable label: name, then email, then id
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallbacks() {
        let mut user = SessionUser {
            id: "u1".to_string(),
            email: Some("a@b.com".to_string()),
            name: Some("Ada".to_string()),
        };
        assert_eq!(user.display_name(), "Ada");
        user.name = None;
        assert_eq!(user.display_name(), "a@b.com");
        user.email = None;
        assert_eq!(user.display_name(), "u1");
    }
}
