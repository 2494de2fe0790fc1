//! Ports to the hosted backend. Implementations live in
//! `infrastructure::backend`; tests use in-memory fakes.

use futures::future::LocalBoxFuture;

use crate::domain::auth::{AuthSession, Credentials, SignUpOutcome};
use crate::domain::errors::InfraResult;
use crate::domain::notes::{Note, NoteDraft};
use crate::domain::screener::CompanyListing;

/// Email/password authentication
pub trait AuthGateway {
    fn sign_in<'a>(&'a self, credentials: &'a Credentials) -> LocalBoxFuture<'a, InfraResult<AuthSession>>;

    fn sign_up<'a>(&'a self, credentials: &'a Credentials) -> LocalBoxFuture<'a, InfraResult<SignUpOutcome>>;

    fn sign_out<'a>(&'a self, session: &'a AuthSession) -> LocalBoxFuture<'a, InfraResult<()>>;
}

/// Row-level-secured `user_notes` table
pub trait NotesRepository {
    /// Newest first
    fn list_notes<'a>(&'a self, session: &'a AuthSession) -> LocalBoxFuture<'a, InfraResult<Vec<Note>>>;

    fn insert_note<'a>(&'a self, session: &'a AuthSession, draft: &'a NoteDraft) -> LocalBoxFuture<'a, InfraResult<()>>;

    fn delete_note<'a>(&'a self, session: &'a AuthSession, note_id: &'a str) -> LocalBoxFuture<'a, InfraResult<()>>;
}

/// Public `companies` table
pub trait CompanyDirectory {
    /// Largest market cap first
    fn list_companies<'a>(&'a self, session: Option<&'a AuthSession>) -> LocalBoxFuture<'a, InfraResult<Vec<CompanyListing>>>;
}

/// Where a signed-in session survives page reloads
pub trait SessionStore {
    fn load(&self) -> InfraResult<Option<AuthSession>>;
    fn save(&self, session: &AuthSession) -> InfraResult<()>;
    fn clear(&self) -> InfraResult<()>;
}
