use crate::domain::{
    auth::{AuthSession, Credentials, SignUpOutcome},
    errors::AppResult,
    logging::{LogComponent, get_logger},
    repositories::{AuthGateway, SessionStore},
};

/// Sign-in, sign-up and sign-out, keeping the persisted session in sync.
pub struct AuthService<G, S> {
    gateway: G,
    sessions: S,
}

impl<G: AuthGateway, S: SessionStore> AuthService<G, S> {
    pub fn new(gateway: G, sessions: S) -> Self {
        Self { gateway, sessions }
    }

    /// Session saved by an earlier page load, dropped if it has expired
    pub fn restore_session(&self, now_secs: u64) -> AppResult<Option<AuthSession>> {
        match self.sessions.load()? {
            Some(session) if session.is_expired(now_secs) => {
                get_logger().info(LogComponent::Application("Auth"), "stored session expired");
                self.sessions.clear()?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthSession> {
        let credentials = Credentials::new(email, password)?;
        let session = self.gateway.sign_in(&credentials).await?;
        self.sessions.save(&session)?;
        get_logger().info(
            LogComponent::Application("Auth"),
            &format!("signed in as {}", credentials.email()),
        );
        Ok(session)
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> AppResult<SignUpOutcome> {
        let credentials = Credentials::new(email, password)?;
        let outcome = self.gateway.sign_up(&credentials).await?;
        if let SignUpOutcome::SignedIn(session) = &outcome {
            self.sessions.save(session)?;
        }
        Ok(outcome)
    }

    /// Local state is cleared even when the backend call fails.
    pub async fn sign_out(&self, session: &AuthSession) -> AppResult<()> {
        let remote = self.gateway.sign_out(session).await;
        self.sessions.clear()?;
        if let Err(e) = &remote {
            get_logger().warn(
                LogComponent::Application("Auth"),
                &format!("backend sign-out failed: {}", e),
            );
        }
        remote.map_err(Into::into)
    }
}
