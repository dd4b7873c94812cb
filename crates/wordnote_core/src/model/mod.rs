//! Domain model for word notes.
//!
//! # Responsibility
//! - Define the canonical note record and its form-input counterpart.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion is a hard removal from the collection; there are no tombstones.

pub mod note;
