use gloo::storage::{LocalStorage, Storage, errors::StorageError};

use crate::domain::{
    auth::AuthSession,
    errors::{InfraResult, InfrastructureError},
    logging::LogComponent,
    repositories::SessionStore,
};
use crate::log_warn;

/// Persists the signed-in session in `localStorage` under one key
#[derive(Debug, Clone)]
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> InfraResult<Option<AuthSession>> {
        match LocalStorage::get::<AuthSession>(&self.key) {
            Ok(session) => Ok(Some(session)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(e)) => {
                // A stale shape from an older build; drop it instead of failing forever.
                log_warn!(LogComponent::Infrastructure("Session"), "discarding unreadable session: {}", e);
                LocalStorage::delete(&self.key);
                Ok(None)
            }
            Err(e) => Err(InfrastructureError::Storage(e.to_string())),
        }
    }

    fn save(&self, session: &AuthSession) -> InfraResult<()> {
        LocalStorage::set(&self.key, session).map_err(|e| InfrastructureError::Storage(e.to_string()))
    }

    fn clear(&self) -> InfraResult<()> {
        LocalStorage::delete(&self.key);
        Ok(())
    }
}
