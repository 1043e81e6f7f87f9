//! Identity and login form.

use serde::{Deserialize, Serialize};

use crate::AuthError;

/// The logged-in user's minimal profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identity {
    email: String,
}

impl Identity {
    /// Create an identity from an email.
    ///
    /// Any non-empty string is accepted. There is deliberately no format
    /// check.
    pub fn new(email: impl Into<String>) -> Result<Self, AuthError> {
        let email = email.into();
        if email.is_empty() {
            return Err(AuthError::empty_email());
        }
        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Login form as submitted by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: Option<String>,
    /// Accepted and ignored.
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_accepts_any_non_empty() {
        assert_eq!(Identity::new("a@b.com").unwrap().email(), "a@b.com");
        assert_eq!(Identity::new("not-an-email").unwrap().email(), "not-an-email");
        assert_eq!(Identity::new(" ").unwrap().email(), " ");
    }

    #[test]
    fn test_identity_rejects_empty() {
        assert_eq!(Identity::new(""), Err(AuthError::empty_email()));
    }

    #[test]
    fn test_login_form_missing_fields_deserialize() {
        let form: LoginForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form, LoginForm::default());
    }
}
