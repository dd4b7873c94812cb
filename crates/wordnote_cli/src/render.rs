//! Plain-text rendering of query output.

use wordnote_core::{count_label, ListState, QueryOutput};

const MATCH_OPEN: &str = "[";
const MATCH_CLOSE: &str = "]";

pub fn render_list(output: &QueryOutput) -> String {
    match output.state {
        ListState::EmptyStore => return "No notes yet.\n".to_string(),
        ListState::NoMatches => return "No matching notes.\n".to_string(),
        ListState::Results => {}
    }

    let mut out = String::new();
    for row in &output.items {
        out.push_str(&row.sentence.render_marked(MATCH_OPEN, MATCH_CLOSE));
        out.push('\n');

        let mut tags = Vec::new();
        if let Some(word) = row.word.as_deref() {
            tags.push(format!("word: {word}"));
        }
        if let Some(meaning) = row.meaning.as_deref() {
            tags.push(format!("meaning: {meaning}"));
        }
        if !tags.is_empty() {
            out.push_str("  ");
            out.push_str(&tags.join("  "));
            out.push('\n');
        }
        out.push_str(&format!("  id: {}\n", row.id));
    }
    if let Some(label) = count_label(output.count) {
        out.push_str(&label);
        out.push('\n');
    }
    out
}
