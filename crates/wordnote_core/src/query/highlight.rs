//! Literal, case-insensitive matching and match highlighting.

use super::pipeline::{QueryError, QueryResult};
use regex::{Regex, RegexBuilder};

const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Case-insensitive matcher for a literal search term.
///
/// The term is escaped before compilation, so regex metacharacters typed by
/// the user match themselves.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    term: String,
    regex: Regex,
}

impl LiteralMatcher {
    /// Builds a matcher for the trimmed `raw_term`.
    ///
    /// Returns `Ok(None)` for a blank term.
    pub fn new(raw_term: &str) -> QueryResult<Option<Self>> {
        let term = raw_term.trim();
        if term.is_empty() {
            return Ok(None);
        }

        let regex = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|err| QueryError::Pattern {
                term: term.to_string(),
                message: err.to_string(),
            })?;

        Ok(Some(Self {
            term: term.to_string(),
            regex,
        }))
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Splits `text` into matched and unmatched segments.
    pub fn highlight(&self, text: &str) -> HighlightedText {
        let mut segments = Vec::new();
        let mut last = 0;
        for found in self.regex.find_iter(text) {
            if found.start() > last {
                segments.push(Segment::plain(&text[last..found.start()]));
            }
            segments.push(Segment::matched(found.as_str()));
            last = found.end();
        }
        if last < text.len() {
            segments.push(Segment::plain(&text[last..]));
        }
        HighlightedText { segments }
    }
}

/// One run of a highlighted sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Sentence split into highlight segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightedText {
    segments: Vec<Segment>,
}

impl HighlightedText {
    /// Text with no highlighted runs.
    pub fn unmarked(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            segments: vec![Segment::plain(text)],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn has_matches(&self) -> bool {
        self.segments.iter().any(|segment| segment.matched)
    }

    /// Matched runs, in order of appearance.
    pub fn matches(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|segment| segment.matched)
            .map(|segment| segment.text.as_str())
    }

    /// Original text without markers.
    pub fn plain(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect()
    }

    /// Renders the text with `open`/`close` around every matched run.
    pub fn render_marked(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.matched {
                out.push_str(open);
                out.push_str(&segment.text);
                out.push_str(close);
            } else {
                out.push_str(&segment.text);
            }
        }
        out
    }
}
