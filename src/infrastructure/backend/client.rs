use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_net::http::{Request, RequestBuilder, Response};

use super::dto::{NewNoteRow, PasswordGrant, TokenResponse, decode, parse_error_body};
use crate::config::AppConfig;
use crate::domain::{
    auth::{AuthSession, Credentials, SignUpOutcome},
    errors::{InfraResult, InfrastructureError, NetworkError},
    logging::LogComponent,
    notes::{Note, NoteDraft},
    repositories::{AuthGateway, CompanyDirectory, NotesRepository},
    screener::CompanyListing,
};
use crate::{log_debug, log_warn};

/// HTTP client for the hosted auth and REST endpoints
#[derive(Debug, Clone)]
pub struct BackendRestClient {
    config: AppConfig,
}

impl BackendRestClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Anonymous requests authenticate with the public key itself
    fn authorize(&self, builder: RequestBuilder, session: Option<&AuthSession>) -> RequestBuilder {
        let bearer = session
            .map(|session| session.access_token.as_str())
            .unwrap_or(&self.config.anon_key);
        builder
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", bearer))
    }

    async fn read(response: Result<Response, gloo_net::Error>, what: &str) -> InfraResult<String> {
        let response = response.map_err(|e| {
            NetworkError::HttpRequestFailed(format!("{}: {}", what, e))
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::HttpRequestFailed(format!("{}: {}", what, e)))?;

        if !response.ok() {
            let error = parse_error_body(status, &response.status_text(), &body);
            log_warn!(LogComponent::Infrastructure("Backend"), "{} failed: {}", what, error);
            return Err(InfrastructureError::Backend(error));
        }
        log_debug!(LogComponent::Infrastructure("Backend"), "{} -> {} ({} bytes)", what, status, body.len());
        Ok(body)
    }

    fn json_body<T: serde::Serialize>(builder: RequestBuilder, body: &T) -> InfraResult<Request> {
        builder
            .json(body)
            .map_err(|e| NetworkError::HttpRequestFailed(format!("encode request: {}", e)).into())
    }

    async fn password_grant(&self, url: &str, credentials: &Credentials, what: &str) -> InfraResult<TokenResponse> {
        let grant = PasswordGrant { email: credentials.email(), password: credentials.password() };
        let request = Self::json_body(self.authorize(Request::post(url), None), &grant)?;
        let body = Self::read(request.send().await, what).await?;
        Ok(decode(&body)?)
    }
}

impl AuthGateway for BackendRestClient {
    fn sign_in<'a>(&'a self, credentials: &'a Credentials) -> LocalBoxFuture<'a, InfraResult<AuthSession>> {
        async move {
            let url = self.config.auth_url("token?grant_type=password");
            let response = self.password_grant(&url, credentials, "sign in").await?;
            response.into_session().ok_or_else(|| {
                NetworkError::DeserializationFailed("token response without a session".to_string()).into()
            })
        }
        .boxed_local()
    }

    fn sign_up<'a>(&'a self, credentials: &'a Credentials) -> LocalBoxFuture<'a, InfraResult<SignUpOutcome>> {
        async move {
            let url = self.config.auth_url("signup");
            let response = self.password_grant(&url, credentials, "sign up").await?;
            Ok(response.into_sign_up_outcome())
        }
        .boxed_local()
    }

    fn sign_out<'a>(&'a self, session: &'a AuthSession) -> LocalBoxFuture<'a, InfraResult<()>> {
        async move {
            let url = self.config.auth_url("logout");
            let builder = self.authorize(Request::post(&url), Some(session));
            Self::read(builder.send().await, "sign out").await.map(|_| ())
        }
        .boxed_local()
    }
}

impl NotesRepository for BackendRestClient {
    fn list_notes<'a>(&'a self, session: &'a AuthSession) -> LocalBoxFuture<'a, InfraResult<Vec<Note>>> {
        async move {
            let url = self.config.rest_url("user_notes?select=*&order=created_at.desc");
            let builder = self.authorize(Request::get(&url), Some(session));
            let body = Self::read(builder.send().await, "list notes").await?;
            Ok(decode(&body)?)
        }
        .boxed_local()
    }

    fn insert_note<'a>(&'a self, session: &'a AuthSession, draft: &'a NoteDraft) -> LocalBoxFuture<'a, InfraResult<()>> {
        async move {
            let url = self.config.rest_url("user_notes");
            let builder = self
                .authorize(Request::post(&url), Some(session))
                .header("Prefer", "return=minimal");
            let request = Self::json_body(builder, &NewNoteRow::new(draft, &session.user.id))?;
            Self::read(request.send().await, "insert note").await.map(|_| ())
        }
        .boxed_local()
    }

    fn delete_note<'a>(&'a self, session: &'a AuthSession, note_id: &'a str) -> LocalBoxFuture<'a, InfraResult<()>> {
        async move {
            let id = String::from(js_sys::encode_uri_component(note_id));
            let url = self.config.rest_url(&format!("user_notes?id=eq.{}", id));
            let builder = self.authorize(Request::delete(&url), Some(session));
            Self::read(builder.send().await, "delete note").await.map(|_| ())
        }
        .boxed_local()
    }
}

impl CompanyDirectory for BackendRestClient {
    fn list_companies<'a>(&'a self, session: Option<&'a AuthSession>) -> LocalBoxFuture<'a, InfraResult<Vec<CompanyListing>>> {
        async move {
            let url = self.config.rest_url("companies?select=*&order=market_cap.desc");
            let builder = self.authorize(Request::get(&url), session);
            let body = Self::read(builder.send().await, "list companies").await?;
            Ok(decode(&body)?)
        }
        .boxed_local()
    }
}
