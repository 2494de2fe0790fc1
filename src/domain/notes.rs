use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::errors::ValidationError;

/// Private note row; the backend only returns the caller's own notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    pub created_at: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Validated input for a new note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    title: String,
    content: String,
}

impl NoteDraft {
    pub fn new(title: &str, content: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyNoteTitle);
        }
        Ok(Self { title: title.to_string(), content: content.trim().to_string() })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_and_requires_title() {
        let draft = NoteDraft::new("  Q3 thesis ", "\n buy the dip \n").unwrap();
        assert_eq!(draft.title(), "Q3 thesis");
        assert_eq!(draft.content(), "buy the dip");
        assert_eq!(NoteDraft::new("   ", "body"), Err(ValidationError::EmptyNoteTitle));
    }

    #[test]
    fn null_content_reads_as_empty() {
        let note: Note = serde_json::from_str(
            r#"{"id":"n-1","user_id":"u-1","title":"Watchlist","content":null,"created_at":"2024-05-01T09:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(note.content, "");
    }
}
