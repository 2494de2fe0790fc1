use crate::domain::{
    auth::AuthSession,
    errors::{AppResult, ApplicationError, ValidationError},
    logging::{LogComponent, get_logger},
    notes::{Note, NoteDraft},
    repositories::NotesRepository,
};

/// Private notes of the signed-in user. Mutations return the refreshed list.
pub struct NotesService<N> {
    repository: N,
}

impl<N: NotesRepository> NotesService<N> {
    pub fn new(repository: N) -> Self {
        Self { repository }
    }

    fn require(session: Option<&AuthSession>) -> AppResult<&AuthSession> {
        session.ok_or_else(|| ApplicationError::NotAuthenticated.into())
    }

    pub async fn list(&self, session: Option<&AuthSession>) -> AppResult<Vec<Note>> {
        let session = Self::require(session)?;
        Ok(self.repository.list_notes(session).await?)
    }

    pub async fn add(&self, session: Option<&AuthSession>, title: &str, content: &str) -> AppResult<Vec<Note>> {
        let session = Self::require(session)?;
        let draft = NoteDraft::new(title, content)?;
        self.repository.insert_note(session, &draft).await?;
        get_logger().debug(
            LogComponent::Application("Notes"),
            &format!("added note '{}'", draft.title()),
        );
        self.list(Some(session)).await
    }

    pub async fn delete(&self, session: Option<&AuthSession>, note_id: &str) -> AppResult<Vec<Note>> {
        let session = Self::require(session)?;
        if note_id.trim().is_empty() {
            return Err(ValidationError::EmptyNoteId.into());
        }
        self.repository.delete_note(session, note_id).await?;
        self.list(Some(session)).await
    }
}
