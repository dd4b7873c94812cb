//! Filter, sort, highlight and count in one pass.
//!
//! # Invariants
//! - Filtering only considers `sentence`.
//! - Sort key is `(sentence length, base-collated sentence)`; the sort is
//!   stable so equal keys keep collection order.
//! - `count` equals `items.len()`.

use super::collation::{base_key, sentence_len};
use super::highlight::{HighlightedText, LiteralMatcher};
use crate::model::note::{Note, NoteId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type QueryResult<T> = Result<T, QueryError>;

/// Query-layer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Literal search pattern could not be compiled (e.g. size limit).
    Pattern { term: String, message: String },
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern { term, message } => {
                let preview: String = term.chars().take(32).collect();
                write!(f, "cannot search for `{preview}`: {message}")
            }
        }
    }
}

impl Error for QueryError {}

/// Which empty-or-not state the list is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    /// The collection itself is empty.
    EmptyStore,
    /// The collection has notes but none match the term.
    NoMatches,
    Results,
}

/// Display-ready projection of one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: NoteId,
    pub word: Option<String>,
    pub meaning: Option<String>,
    pub sentence: HighlightedText,
    pub created: i64,
}

/// Pipeline output for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutput {
    /// Trimmed search term; empty when not searching.
    pub term: String,
    pub items: Vec<NoteRow>,
    /// Number of notes left after filtering.
    pub count: usize,
    pub state: ListState,
}

/// Runs filter, sort, highlight and count over `notes`.
///
/// # Errors
/// - `Pattern` when the literal term cannot be compiled.
pub fn run_query(notes: &[Note], raw_term: &str) -> QueryResult<QueryOutput> {
    let matcher = LiteralMatcher::new(raw_term)?;
    let mut kept = filter_with(notes, matcher.as_ref());
    sort_notes(&mut kept);

    let items: Vec<NoteRow> = kept
        .into_iter()
        .map(|note| NoteRow {
            id: note.id.clone(),
            word: note.word().map(str::to_string),
            meaning: note.meaning().map(str::to_string),
            sentence: match matcher.as_ref() {
                Some(matcher) => matcher.highlight(&note.sentence),
                None => HighlightedText::unmarked(&note.sentence),
            },
            created: note.created,
        })
        .collect();

    let count = items.len();
    let state = if notes.is_empty() {
        ListState::EmptyStore
    } else if count == 0 {
        ListState::NoMatches
    } else {
        ListState::Results
    };

    Ok(QueryOutput {
        term: matcher
            .as_ref()
            .map(|matcher| matcher.term().to_string())
            .unwrap_or_default(),
        items,
        count,
        state,
    })
}

/// Keeps notes whose sentence contains the trimmed term, ignoring case.
/// A blank term keeps everything.
pub fn filter_notes<'a>(notes: &'a [Note], raw_term: &str) -> QueryResult<Vec<&'a Note>> {
    let matcher = LiteralMatcher::new(raw_term)?;
    Ok(filter_with(notes, matcher.as_ref()))
}

/// Sorts by sentence length, then base-collated sentence.
pub fn sort_notes(notes: &mut [&Note]) {
    notes.sort_by_cached_key(|note| (sentence_len(&note.sentence), base_key(&note.sentence)));
}

/// Human-readable result count; `None` when there is nothing to count.
pub fn count_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 result".to_string()),
        n => Some(format!("{n} results")),
    }
}

fn filter_with<'a>(notes: &'a [Note], matcher: Option<&LiteralMatcher>) -> Vec<&'a Note> {
    match matcher {
        Some(matcher) => notes
            .iter()
            .filter(|note| matcher.is_match(&note.sentence))
            .collect(),
        None => notes.iter().collect(),
    }
}
