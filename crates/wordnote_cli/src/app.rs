//! Runs one parsed store command against a note service.

use crate::cli::Command;
use crate::terminal_view::TerminalView;
use std::io::{BufRead, Write};
use wordnote_core::{ClearOutcome, KeyValueStore, NoteId, NoteService, SaveOutcome, ServiceResult};

/// What a finished command reports besides the rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Saved(String),
    SentenceRequired,
    Listed,
    Deleted(String),
    NotFound(String),
    Cleared(usize),
    ClearDeclined,
}

impl Report {
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Saved(id) => Some(format!("saved {id}")),
            Self::SentenceRequired => Some("sentence is required".to_string()),
            Self::Listed => None,
            Self::Deleted(id) => Some(format!("deleted {id}")),
            Self::NotFound(id) => Some(format!("no note with id {id}")),
            Self::Cleared(count) => Some(format!("cleared {count} note(s)")),
            Self::ClearDeclined => Some("clear cancelled".to_string()),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::SentenceRequired => 2,
            _ => 0,
        }
    }
}

/// Starts the service and runs `command`.
///
/// Non-store commands (`ping`, `version`) are handled by the caller and
/// report as `Listed` here.
pub fn execute<K, R, W>(
    service: &mut NoteService<K, TerminalView<R, W>>,
    command: Command,
) -> ServiceResult<Report>
where
    K: KeyValueStore,
    R: BufRead,
    W: Write,
{
    service.start()?;

    match command {
        Command::Add { .. } => {
            service.view_mut().form = command.draft().unwrap_or_default();
            match service.on_save()? {
                SaveOutcome::Saved(id) => Ok(Report::Saved(id.to_string())),
                SaveOutcome::Rejected => Ok(Report::SentenceRequired),
            }
        }
        Command::List { .. } => {
            service.view_mut().search = command.search_term().unwrap_or_default();
            service.on_search_input()?;
            Ok(Report::Listed)
        }
        Command::Delete { ref id } => {
            let id = NoteId::from(id.as_str());
            if service.on_delete(&id)? {
                Ok(Report::Deleted(id.to_string()))
            } else {
                Ok(Report::NotFound(id.to_string()))
            }
        }
        Command::Clear { yes } => {
            service.view_mut().set_assume_yes(yes);
            match service.on_clear_all()? {
                ClearOutcome::Cleared(count) => Ok(Report::Cleared(count)),
                ClearOutcome::Declined => Ok(Report::ClearDeclined),
            }
        }
        Command::Ping | Command::Version => Ok(Report::Listed),
    }
}

#[cfg(test)]
mod tests {
    use super::{execute, Report};
    use crate::cli::Cli;
    use clap::Parser;
    use crate::terminal_view::TerminalView;
    use std::io::{Cursor, Sink};
    use wordnote_core::{MemoryKvStore, NoteService, NoteStore};

    type TestService = NoteService<MemoryKvStore, TerminalView<Cursor<&'static str>, Sink>>;

    fn service_for(kv: MemoryKvStore, input: &'static str) -> TestService {
        let view = TerminalView::new(Cursor::new(input), std::io::sink());
        NoteService::new(NoteStore::with_default_key(kv), view)
    }

    fn run_on(service: &mut TestService, argv: &[&str]) -> Report {
        let mut full = vec!["wordnote"];
        full.extend_from_slice(argv);
        let cli = Cli::try_parse_from(full).expect("parse");
        execute(service, cli.command).expect("execute")
    }

    fn run(kv: MemoryKvStore, input: &'static str, argv: &[&str]) -> (MemoryKvStore, Report, String) {
        let mut service = service_for(kv, input);
        let report = run_on(&mut service, argv);
        let rendered = service.view().last_render().unwrap_or_default().to_string();
        let (store, _) = service.into_parts();
        (store.into_inner(), report, rendered)
    }

    #[test]
    fn add_then_list_with_search_highlights_matches() {
        let (kv, report, _) = run(MemoryKvStore::new(), "", &["add", "I", "eat", "an", "apple"]);
        assert!(matches!(report, Report::Saved(_)));
        let (kv, _, _) = run(kv, "", &["add", "Apple", "pie", "is", "sweet", "-w", "pie"]);

        let (_, report, rendered) = run(kv, "", &["list", "apple"]);
        assert_eq!(report, Report::Listed);
        assert!(rendered.starts_with("I eat an [apple]\n"));
        assert!(rendered.contains("[Apple] pie is sweet\n  word: pie\n"));
        assert!(rendered.ends_with("2 results\n"));
    }

    #[test]
    fn blank_add_reports_sentence_required() {
        let mut service = service_for(MemoryKvStore::new(), "");
        let report = run_on(&mut service, &["add", "--word", "x"]);
        assert_eq!(report, Report::SentenceRequired);
        assert_eq!(report.exit_code(), 2);
        assert!(service.store().is_empty());
        assert_eq!(service.view().form.word, "x");
    }

    #[test]
    fn accepted_add_clears_the_form() {
        let mut service = service_for(MemoryKvStore::new(), "");
        let report = run_on(&mut service, &["add", "hello", "there", "-m", "greeting"]);
        assert!(matches!(report, Report::Saved(_)));
        assert!(service.view().form.sentence.is_empty());
        assert!(service.view().form.meaning.is_empty());
    }

    #[test]
    fn list_with_several_words_searches_the_joined_phrase() {
        let (kv, _, _) = run(MemoryKvStore::new(), "", &["add", "I", "eat", "an", "apple"]);
        let (kv, _, _) = run(kv, "", &["add", "an", "old", "apple"]);

        let (_, _, rendered) = run(kv, "", &["list", "an", "apple"]);
        assert!(rendered.contains("I eat [an apple]\n"));
        assert!(!rendered.contains("old"));
        assert!(rendered.ends_with("1 result\n"));
    }

    #[test]
    fn clear_respects_confirmation_answer() {
        let (kv, _, _) = run(MemoryKvStore::new(), "", &["add", "one"]);

        let (kv, report, rendered) = run(kv, "n\n", &["clear"]);
        assert_eq!(report, Report::ClearDeclined);
        assert!(rendered.contains("one\n"));

        let (_, report, rendered) = run(kv, "y\n", &["clear"]);
        assert_eq!(report, Report::Cleared(1));
        assert_eq!(rendered, "No notes yet.\n");
    }

    #[test]
    fn delete_unknown_id_reports_not_found() {
        let (_, report, _) = run(MemoryKvStore::new(), "", &["delete", "nope"]);
        assert_eq!(report, Report::NotFound("nope".to_string()));
        assert_eq!(report.exit_code(), 0);
    }
}
