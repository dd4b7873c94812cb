//! `NoteView` implementation for a one-shot terminal invocation.
//!
//! Inputs come from parsed arguments, confirmations are read from `input`,
//! prompts are written to `prompt_out`, and only the latest render is kept
//! for printing once the command finishes.

use crate::render::render_list;
use std::io::{BufRead, Write};
use std::time::Duration;
use wordnote_core::{NoteDraft, NoteView, QueryOutput};

pub struct TerminalView<R: BufRead, W: Write> {
    pub search: String,
    pub form: NoteDraft,
    assume_yes: bool,
    input: R,
    prompt_out: W,
    last_render: Option<String>,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self {
            search: String::new(),
            form: NoteDraft::default(),
            assume_yes: false,
            input,
            prompt_out,
            last_render: None,
        }
    }

    /// Answers every confirmation with "yes" without prompting.
    pub fn set_assume_yes(&mut self, assume_yes: bool) {
        self.assume_yes = assume_yes;
    }

    pub fn last_render(&self) -> Option<&str> {
        self.last_render.as_deref()
    }
}

impl<R: BufRead, W: Write> NoteView for TerminalView<R, W> {
    fn search_term(&self) -> String {
        self.search.clone()
    }

    fn form_input(&self) -> NoteDraft {
        self.form.clone()
    }

    fn clear_form(&mut self) {
        self.form = NoteDraft::default();
    }

    fn focus_sentence(&mut self) {}

    // Nothing to flash; `execute` reports the rejected save.
    fn flash_sentence_error(&mut self, _duration: Duration) {}

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if write!(self.prompt_out, "{prompt} [y/N] ")
            .and_then(|()| self.prompt_out.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }

    fn render(&mut self, output: &QueryOutput) {
        self.last_render = Some(render_list(output));
    }
}
