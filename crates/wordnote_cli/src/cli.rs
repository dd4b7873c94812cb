//! Command-line surface.
//!
//! # Invariants
//! - Multi-word positionals are joined with one space; quote a term to keep
//!   its inner spacing.
//! - A blank `add` sentence still parses so the service can reject it.

use clap::{error::ErrorKind, Parser, Subcommand};
use wordnote_core::NoteDraft;

#[derive(Debug, Parser)]
#[command(name = "wordnote")]
#[command(about = "Keep example sentences for the words you are learning")]
#[command(version = wordnote_core::core_version())]
#[command(arg_required_else_help = true)]
#[command(after_help = "Environment:
  WORDNOTE_DB_PATH      SQLite file holding the notes
  WORDNOTE_STORAGE_KEY  key the note collection is stored under
  WORDNOTE_LOG_LEVEL    trace|debug|info|warn|error
  WORDNOTE_LOG_DIR      absolute directory for rolling log files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Save a new note.
    Add {
        /// Example sentence; separate words are joined with one space.
        sentence: Vec<String>,
        #[arg(long, short = 'w', default_value = "")]
        word: String,
        #[arg(long, short = 'm', default_value = "")]
        meaning: String,
    },
    /// List notes, optionally filtered by a search term.
    #[command(visible_alias = "search")]
    List { search: Vec<String> },
    /// Delete one note by id.
    #[command(visible_alias = "rm")]
    Delete { id: String },
    /// Delete every note after confirmation.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y', default_value_t = false)]
        yes: bool,
    },
    /// Check that the core library answers.
    Ping,
    /// Print the core library version.
    Version,
}

impl Command {
    /// Form input for `add`; `None` for every other command.
    pub fn draft(&self) -> Option<NoteDraft> {
        match self {
            Self::Add {
                sentence,
                word,
                meaning,
            } => Some(NoteDraft {
                word: word.clone(),
                sentence: sentence.join(" "),
                meaning: meaning.clone(),
            }),
            _ => None,
        }
    }

    /// Search term for `list`; `None` for every other command.
    pub fn search_term(&self) -> Option<String> {
        match self {
            Self::List { search } => Some(search.join(" ")),
            _ => None,
        }
    }
}

/// Exit code for a parse outcome that stopped before running a command.
///
/// Help and version output exit 0; every other usage error exits 1.
pub fn usage_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}
