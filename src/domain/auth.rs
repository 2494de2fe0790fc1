use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Shortest password the backend accepts
pub const MIN_PASSWORD_LEN: usize = 6;

/// Email/password pair checked before it is sent anywhere
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
            None => false,
        };
        if !valid_email || email.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort { min_len: MIN_PASSWORD_LEN });
        }
        Ok(Self { email: email.to_string(), password: password.to_string() })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("email", &self.email).finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Signed-in session issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix seconds
    #[serde(default)]
    pub expires_at: Option<u64>,
    pub user: AuthUser,
}

impl AuthSession {
    pub fn is_expired(&self, now_secs: u64) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now_secs)
    }

    pub fn email(&self) -> &str {
        self.user.email.as_deref().unwrap_or_default()
    }
}

/// Result of a sign-up request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    SignedIn(AuthSession),
    /// The account exists but the email address must be confirmed first
    ConfirmationRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_validate_email_and_password() {
        assert!(Credentials::new("investor@iron.capital", "secret1").is_ok());
        assert_eq!(
            Credentials::new("investor", "secret1"),
            Err(ValidationError::InvalidEmail("investor".to_string()))
        );
        assert!(Credentials::new("a@b", "secret1").is_err());
        assert!(Credentials::new("@iron.capital", "secret1").is_err());
        assert_eq!(
            Credentials::new("investor@iron.capital", "12345"),
            Err(ValidationError::PasswordTooShort { min_len: 6 })
        );
    }

    #[test]
    fn debug_hides_password() {
        let credentials = Credentials::new("investor@iron.capital", "hunter22").unwrap();
        assert!(!format!("{:?}", credentials).contains("hunter22"));
    }

    #[test]
    fn session_expiry() {
        let session = AuthSession {
            access_token: "t".to_string(),
            refresh_token: None,
            expires_at: Some(100),
            user: AuthUser { id: "u1".to_string(), email: None },
        };
        assert!(!session.is_expired(99));
        assert!(session.is_expired(100));
        assert_eq!(session.email(), "");
    }
}
