//! Query/sort/highlight pipeline.
//!
//! # Responsibility
//! - Turn the note collection plus a raw search term into display rows.
//! - Keep search semantics (literal, case-insensitive) in one place.
//!
//! # Invariants
//! - Pure: no storage access, no logging, no mutation of inputs.
//! - Display order is recomputed on every call.

pub mod collation;
pub mod highlight;
pub mod pipeline;

pub use highlight::{HighlightedText, LiteralMatcher, Segment};
pub use pipeline::{
    count_label, filter_notes, run_query, sort_notes, ListState, NoteRow, QueryError,
    QueryOutput, QueryResult,
};
