//! Note domain model.
//!
//! # Responsibility
//! - Define the single record kept by the note store.
//! - Normalize and validate raw form input before a note exists.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `sentence` is never empty for a note that reached the store.
//! - Notes are never mutated in place after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque note identifier.
///
/// Fresh ids are UUID v4 in simple form; ids loaded from storage are kept
/// verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation failures for note creation and persisted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptySentence,
    EmptyId,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySentence => write!(f, "sentence must not be empty"),
            Self::EmptyId => write!(f, "note id must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// Raw form input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub word: String,
    pub sentence: String,
    pub meaning: String,
}

impl NoteDraft {
    pub fn new(
        word: impl Into<String>,
        sentence: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            sentence: sentence.into(),
            meaning: meaning.into(),
        }
    }

    /// Returns a copy with every field trimmed.
    pub fn normalized(&self) -> Self {
        Self {
            word: self.word.trim().to_string(),
            sentence: self.sentence.trim().to_string(),
            meaning: self.meaning.trim().to_string(),
        }
    }

    /// Checks that the sentence survives trimming.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.sentence.trim().is_empty() {
            return Err(NoteValidationError::EmptySentence);
        }
        Ok(())
    }
}

/// One persisted note.
///
/// Field names match the persisted JSON record:
/// `id, word, sentence, meaning, created`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Empty string means "no word".
    #[serde(default)]
    pub word: String,
    pub sentence: String,
    /// Empty string means "no meaning".
    #[serde(default)]
    pub meaning: String,
    /// Unix epoch milliseconds. Kept for the record, unused for ordering.
    #[serde(default)]
    pub created: i64,
}

impl Note {
    /// Builds a note from form input with a fresh id.
    ///
    /// # Errors
    /// - `EmptySentence` when the sentence is blank after trimming.
    pub fn from_draft(draft: &NoteDraft, created: i64) -> Result<Self, NoteValidationError> {
        draft.validate()?;
        let normalized = draft.normalized();
        Ok(Self {
            id: NoteId::generate(),
            word: normalized.word,
            sentence: normalized.sentence,
            meaning: normalized.meaning,
            created,
        })
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id.as_str().is_empty() {
            return Err(NoteValidationError::EmptyId);
        }
        if self.sentence.trim().is_empty() {
            return Err(NoteValidationError::EmptySentence);
        }
        Ok(())
    }

    pub fn word(&self) -> Option<&str> {
        non_empty(&self.word)
    }

    pub fn meaning(&self) -> Option<&str> {
        non_empty(&self.meaning)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteDraft, NoteId, NoteValidationError};

    #[test]
    fn from_draft_trims_all_fields() {
        let draft = NoteDraft::new("  apple ", "  I eat an apple  ", " elma ");
        let note = Note::from_draft(&draft, 42).unwrap();
        assert_eq!(note.word, "apple");
        assert_eq!(note.sentence, "I eat an apple");
        assert_eq!(note.meaning, "elma");
        assert_eq!(note.created, 42);
        assert!(!note.id.as_str().is_empty());
    }

    #[test]
    fn from_draft_rejects_whitespace_sentence() {
        let draft = NoteDraft::new("word", " \t\n ", "");
        let err = Note::from_draft(&draft, 0).unwrap_err();
        assert_eq!(err, NoteValidationError::EmptySentence);
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(NoteId::generate(), NoteId::generate());
    }

    #[test]
    fn optional_fields_read_as_none_when_empty() {
        let note = Note::from_draft(&NoteDraft::new("", "sentence", ""), 0).unwrap();
        assert_eq!(note.word(), None);
        assert_eq!(note.meaning(), None);
    }

    #[test]
    fn deserializes_legacy_record_without_optional_fields() {
        let note: Note = serde_json::from_str(r#"{"id":"k3j9x1a","sentence":"hi"}"#).unwrap();
        assert_eq!(note.id.as_str(), "k3j9x1a");
        assert_eq!(note.word, "");
        assert_eq!(note.created, 0);
    }

    #[test]
    fn validate_rejects_empty_id() {
        let mut note = Note::from_draft(&NoteDraft::new("", "sentence", ""), 0).unwrap();
        note.id = NoteId::from("");
        assert_eq!(note.validate(), Err(NoteValidationError::EmptyId));
    }
}
