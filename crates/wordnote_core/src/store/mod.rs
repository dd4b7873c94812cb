//! Note collection ownership and persistence.
//!
//! # Responsibility
//! - Own the in-memory note collection.
//! - Mirror the whole collection to one key-value entry on every mutation.
//!
//! # Invariants
//! - Store writes must enforce `Note::validate()` before persistence.
//! - Note ids are unique within the collection.
//! - Display order is never stored; see `crate::query`.

pub mod note_store;
