//! Core domain logic for WordNote.
//! This crate is the single source of truth for note invariants; front ends
//! only implement [`NoteView`].

pub mod config;
pub mod db;
pub mod kv;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use config::AppConfig;
pub use kv::{KeyValueStore, KvError, KvResult, MemoryKvStore, SqliteKvStore};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteDraft, NoteId, NoteValidationError};
pub use query::{
    count_label, run_query, HighlightedText, ListState, NoteRow, QueryError, QueryOutput,
};
pub use service::note_service::{
    ClearOutcome, NoteService, SaveOutcome, ServiceError, ServiceResult, CLEAR_ALL_PROMPT,
    SENTENCE_ERROR_CUE,
};
pub use service::view::NoteView;
pub use store::note_store::{NoteStore, StoreError, StoreResult, DEFAULT_STORAGE_KEY};

/// Minimal health-check API for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
