//! Key-value backed note store.
//!
//! # Responsibility
//! - Load the persisted collection at startup, failing soft to empty.
//! - Apply add/remove/clear mutations and persist after each one.
//!
//! # Invariants
//! - A rejected `add` neither mutates nor persists.
//! - Persist failures propagate to the caller; the in-memory collection
//!   keeps the mutation either way.

use crate::kv::{KeyValueStore, KvError};
use crate::model::note::{Note, NoteId, NoteValidationError};
use log::{info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default storage key for the note collection.
pub const DEFAULT_STORAGE_KEY: &str = "word-notes-v1";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error.
#[derive(Debug)]
pub enum StoreError {
    /// Note failed record-level validation.
    InvalidNote(NoteValidationError),
    /// Note id already present in the collection.
    DuplicateId(NoteId),
    /// Collection could not be serialized.
    Serialize(serde_json::Error),
    /// Underlying key-value write failed.
    Kv(KvError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNote(err) => write!(f, "invalid note: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate note id: {id}"),
            Self::Serialize(err) => write!(f, "failed to serialize notes: {err}"),
            Self::Kv(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidNote(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::Serialize(err) => Some(err),
            Self::Kv(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::InvalidNote(value)
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Owns the note collection and its key-value backing entry.
pub struct NoteStore<K: KeyValueStore> {
    kv: K,
    key: String,
    notes: Vec<Note>,
}

impl<K: KeyValueStore> NoteStore<K> {
    /// Creates an empty store bound to `key`. Call [`NoteStore::load`] to
    /// pick up previously persisted notes.
    pub fn new(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
            notes: Vec::new(),
        }
    }

    /// Creates an empty store bound to [`DEFAULT_STORAGE_KEY`].
    pub fn with_default_key(kv: K) -> Self {
        Self::new(kv, DEFAULT_STORAGE_KEY)
    }

    /// Replaces the collection with the persisted one.
    ///
    /// Missing, unreadable or malformed data resets the collection to empty.
    /// Individual records violating note invariants are skipped.
    pub fn load(&mut self) {
        self.notes = match self.kv.get_item(&self.key) {
            Ok(Some(raw)) => decode_collection(&raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(
                    "event=store_load module=store status=error error_code=kv_read_failed error={}",
                    err
                );
                Vec::new()
            }
        };
        info!(
            "event=store_load module=store status=ok count={}",
            self.notes.len()
        );
    }

    /// Appends a fully-formed note and persists the collection.
    ///
    /// # Errors
    /// - `InvalidNote` / `DuplicateId` before any mutation.
    /// - `Serialize` / `Kv` when persisting fails.
    pub fn add(&mut self, note: Note) -> StoreResult<()> {
        note.validate()?;
        if self.get(&note.id).is_some() {
            return Err(StoreError::DuplicateId(note.id));
        }

        let id = note.id.clone();
        self.notes.push(note);
        self.persist()?;
        info!("event=note_add module=store status=ok note_id={id}");
        Ok(())
    }

    /// Removes the note with `id` and persists. Returns whether a note was
    /// removed; an unknown id still persists the unchanged collection.
    pub fn remove(&mut self, id: &NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| &note.id != id);
        let removed = self.notes.len() != before;
        self.persist()?;
        info!("event=note_remove module=store status=ok note_id={id} removed={removed}");
        Ok(removed)
    }

    /// Empties the collection and persists. Returns how many notes were
    /// dropped.
    pub fn clear(&mut self) -> StoreResult<usize> {
        let dropped = self.notes.len();
        self.notes.clear();
        self.persist()?;
        info!("event=store_clear module=store status=ok dropped={dropped}");
        Ok(dropped)
    }

    /// Serializes the whole collection and writes it with one `set_item`.
    pub fn persist(&mut self) -> StoreResult<()> {
        let payload = serde_json::to_string(&self.notes)?;
        self.kv.set_item(&self.key, &payload).map_err(|err| {
            warn!(
                "event=store_persist module=store status=error error_code=kv_write_failed error={}",
                err
            );
            StoreError::from(err)
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Releases the key-value backend.
    pub fn into_inner(self) -> K {
        self.kv
    }
}

fn decode_collection(raw: &str) -> Vec<Note> {
    let records: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(err) => {
            warn!(
                "event=store_load module=store status=error error_code=malformed_payload line={} column={}",
                err.line(),
                err.column()
            );
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut notes = Vec::with_capacity(records.len());
    for record in records {
        let note: Note = match serde_json::from_value(record) {
            Ok(note) => note,
            Err(err) => {
                warn!(
                    "event=store_load module=store status=skip reason=undecodable_record error={err}"
                );
                continue;
            }
        };
        if let Err(err) = note.validate() {
            warn!("event=store_load module=store status=skip reason=invalid_record error={err}");
            continue;
        }
        if !seen.insert(note.id.clone()) {
            warn!(
                "event=store_load module=store status=skip reason=duplicate_id note_id={}",
                note.id
            );
            continue;
        }
        notes.push(note);
    }
    notes
}
