//! View-binding contract used by [`super::note_service::NoteService`].
//!
//! A front end implements [`NoteView`] to expose its inputs and to receive
//! renders. The service never touches presentation details directly.

use crate::model::note::NoteDraft;
use crate::query::QueryOutput;
use std::time::Duration;

/// Presentation surface the note service drives.
pub trait NoteView {
    /// Current raw contents of the search input.
    fn search_term(&self) -> String;
    /// Current raw contents of the word/sentence/meaning inputs.
    fn form_input(&self) -> NoteDraft;
    /// Empties the three form inputs.
    fn clear_form(&mut self);
    /// Moves input focus to the sentence field.
    fn focus_sentence(&mut self);
    /// Shows a transient error cue on the sentence field for `duration`.
    ///
    /// Fire-and-forget: the cue carries no state back to the service.
    fn flash_sentence_error(&mut self, duration: Duration);
    /// Asks the user to confirm a destructive action.
    fn confirm(&mut self, prompt: &str) -> bool;
    /// Replaces the displayed list.
    fn render(&mut self, output: &QueryOutput);
}
