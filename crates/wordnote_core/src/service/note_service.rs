//! Note use-case service.
//!
//! # Responsibility
//! - Handle save/delete/clear-all/search actions coming from a view.
//! - Re-render through the query pipeline after every handled action.
//!
//! # Invariants
//! - Save with a blank sentence mutates nothing and leaves focus on the
//!   sentence input.
//! - Clear-all only runs after the view confirms.
//! - Every render uses the view's current search term.

use crate::kv::KeyValueStore;
use crate::model::note::{Note, NoteId};
use crate::query::{run_query, QueryError};
use crate::service::view::NoteView;
use crate::store::note_store::{NoteStore, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// How long the blank-sentence error cue stays visible.
pub const SENTENCE_ERROR_CUE: Duration = Duration::from_millis(400);

/// Prompt shown before clearing every note.
pub const CLEAR_ALL_PROMPT: &str = "Delete all notes? This cannot be undone.";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for note use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Store mutation or persistence failure.
    Store(StoreError),
    /// Search term could not be turned into a matcher.
    Query(QueryError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Query(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Query(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<QueryError> for ServiceError {
    fn from(value: QueryError) -> Self {
        Self::Query(value)
    }
}

/// Result of a save action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(NoteId),
    /// Sentence was blank; nothing changed.
    Rejected,
}

/// Result of a clear-all action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Confirmed; carries the number of notes dropped.
    Cleared(usize),
    Declined,
}

/// Facade binding a view to a note store.
pub struct NoteService<K: KeyValueStore, V: NoteView> {
    store: NoteStore<K>,
    view: V,
    clock: fn() -> i64,
}

impl<K: KeyValueStore, V: NoteView> NoteService<K, V> {
    /// Creates a service using the system clock for note timestamps.
    pub fn new(store: NoteStore<K>, view: V) -> Self {
        Self {
            store,
            view,
            clock: now_epoch_ms,
        }
    }

    /// Replaces the timestamp source.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Loads persisted notes and performs the first render.
    pub fn start(&mut self) -> ServiceResult<()> {
        self.store.load();
        self.refresh()
    }

    /// Re-renders for the view's current search term.
    pub fn on_search_input(&mut self) -> ServiceResult<()> {
        self.refresh()
    }

    /// Saves the form input as a new note.
    ///
    /// A blank sentence is a soft rejection: focus stays on the sentence
    /// input and the view flashes its error cue.
    pub fn on_save(&mut self) -> ServiceResult<SaveOutcome> {
        let draft = self.view.form_input();
        let note = match Note::from_draft(&draft, (self.clock)()) {
            Ok(note) => note,
            Err(err) => {
                debug!("event=note_save module=service status=rejected error={err}");
                self.view.focus_sentence();
                self.view.flash_sentence_error(SENTENCE_ERROR_CUE);
                return Ok(SaveOutcome::Rejected);
            }
        };

        let id = note.id.clone();
        self.store.add(note)?;
        self.view.clear_form();
        self.refresh()?;
        self.view.focus_sentence();
        info!("event=note_save module=service status=ok note_id={id}");
        Ok(SaveOutcome::Saved(id))
    }

    /// Deletes one note by id. Unknown ids are a no-op.
    pub fn on_delete(&mut self, id: &NoteId) -> ServiceResult<bool> {
        let removed = self.store.remove(id)?;
        self.refresh()?;
        Ok(removed)
    }

    /// Clears every note after the view confirms.
    pub fn on_clear_all(&mut self) -> ServiceResult<ClearOutcome> {
        if !self.view.confirm(CLEAR_ALL_PROMPT) {
            debug!("event=store_clear module=service status=declined");
            return Ok(ClearOutcome::Declined);
        }

        let dropped = self.store.clear()?;
        self.refresh()?;
        Ok(ClearOutcome::Cleared(dropped))
    }

    pub fn store(&self) -> &NoteStore<K> {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Splits the service back into its store and view.
    pub fn into_parts(self) -> (NoteStore<K>, V) {
        (self.store, self.view)
    }

    fn refresh(&mut self) -> ServiceResult<()> {
        let term = self.view.search_term();
        let output = run_query(self.store.notes(), &term)?;
        self.view.render(&output);
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::now_epoch_ms;

    #[test]
    fn clock_is_after_2020() {
        assert!(now_epoch_ms() > 1_577_836_800_000);
    }
}
