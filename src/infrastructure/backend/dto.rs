//! Wire shapes of the hosted backend's auth and REST endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::auth::{AuthSession, AuthUser, SignUpOutcome};
use crate::domain::errors::{BackendError, NetworkError};
use crate::domain::notes::NoteDraft;

#[derive(Debug, Serialize)]
pub struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<UserDto> for AuthUser {
    fn from(dto: UserDto) -> Self {
        AuthUser { id: dto.id, email: dto.email }
    }
}

/// Token response. Sign-up without auto-confirm returns the bare user
/// instead, so every session field is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<u64>,
    #[serde(default)]
    pub user: Option<UserDto>,
}

impl TokenResponse {
    pub fn into_session(self) -> Option<AuthSession> {
        Some(AuthSession {
            access_token: self.access_token?,
            refresh_token: self.refresh_token,
            expires_at: self.expires_at,
            user: self.user?.into(),
        })
    }

    pub fn into_sign_up_outcome(self) -> SignUpOutcome {
        match self.into_session() {
            Some(session) => SignUpOutcome::SignedIn(session),
            None => SignUpOutcome::ConfirmationRequired,
        }
    }
}

/// Body of `POST /rest/v1/user_notes`
#[derive(Debug, Serialize)]
pub struct NewNoteRow<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub user_id: &'a str,
}

impl<'a> NewNoteRow<'a> {
    pub fn new(draft: &'a NoteDraft, user_id: &'a str) -> Self {
        Self { title: draft.title(), content: draft.content(), user_id }
    }
}

/// Error payloads differ between the auth and REST services; take whichever
/// message field is present.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
    error_code: Option<String>,
    code: Option<Value>,
}

pub fn parse_error_body(status: u16, status_text: &str, body: &str) -> BackendError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .or(parsed.msg)
        .or(parsed.error_description)
        .or(parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            if status_text.is_empty() {
                format!("HTTP {}", status)
            } else {
                status_text.to_string()
            }
        });

    let code = parsed.error_code.or_else(|| match parsed.code {
        Some(Value::String(code)) => Some(code),
        _ => None,
    });

    let error = BackendError::new(status, message);
    match code {
        Some(code) => error.with_code(code),
        None => error,
    }
}

/// Decode a JSON success body into `T`
pub fn decode<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T, NetworkError> {
    serde_json::from_str(body).map_err(|e| NetworkError::DeserializationFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_error_uses_msg_and_error_code() {
        let err = parse_error_body(
            400,
            "Bad Request",
            r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#,
        );
        assert_eq!(err.message, "Invalid login credentials");
        assert_eq!(err.code.as_deref(), Some("invalid_credentials"));
        assert_eq!(err.status, 400);
    }

    #[test]
    fn rest_error_uses_message_and_string_code() {
        let err = parse_error_body(
            403,
            "Forbidden",
            r#"{"code":"42501","message":"new row violates row-level security policy","details":null,"hint":null}"#,
        );
        assert_eq!(err.message, "new row violates row-level security policy");
        assert_eq!(err.code.as_deref(), Some("42501"));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn oauth_style_error_and_garbage_body() {
        let err = parse_error_body(400, "", r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#);
        assert_eq!(err.message, "Email not confirmed");

        let err = parse_error_body(502, "Bad Gateway", "<html>oops</html>");
        assert_eq!(err.message, "Bad Gateway");
        assert_eq!(err.code, None);

        let err = parse_error_body(500, "", "");
        assert_eq!(err.message, "HTTP 500");
    }

    #[test]
    fn sign_up_without_session_needs_confirmation() {
        let body = r#"{"id":"u-1","email":"new@iron.capital","confirmation_sent_at":"2024-01-01T00:00:00Z"}"#;
        let response: TokenResponse = decode(body).unwrap();
        assert_eq!(response.into_sign_up_outcome(), SignUpOutcome::ConfirmationRequired);
    }

    #[test]
    fn token_response_becomes_session() {
        let body = r#"{
            "access_token":"jwt","token_type":"bearer","expires_in":3600,"expires_at":1700003600,
            "refresh_token":"r1","user":{"id":"u-1","email":"investor@iron.capital","role":"authenticated"}
        }"#;
        let response: TokenResponse = decode(body).unwrap();
        let session = response.into_session().unwrap();
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.expires_at, Some(1_700_003_600));
        assert_eq!(session.email(), "investor@iron.capital");
    }
}
