//! `wordnote` terminal front end.
//!
//! # Responsibility
//! - Parse one command, open the configured store, run the command and
//!   print the resulting list.
//! - Keep all note semantics in `wordnote_core`.

mod app;
mod cli;
mod render;
mod terminal_view;

use app::execute;
use clap::Parser;
use cli::{usage_exit_code, Cli, Command};
use log::warn;
use std::error::Error;
use std::io;
use std::process::ExitCode;
use terminal_view::TerminalView;
use wordnote_core::{init_from_config, AppConfig, NoteService, NoteStore, SqliteKvStore};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("wordnote: {err}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<u8, Box<dyn Error>> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap routes help/version to stdout and usage errors to stderr.
            err.print()?;
            return Ok(usage_exit_code(err.kind()));
        }
    };
    let command = cli.command;

    match command {
        Command::Ping => {
            println!("wordnote_core ping={}", wordnote_core::ping());
            return Ok(0);
        }
        Command::Version => {
            println!("wordnote {}", wordnote_core::core_version());
            return Ok(0);
        }
        _ => {}
    }

    let config = AppConfig::from_env();
    if let Err(err) = init_from_config(&config) {
        eprintln!("wordnote: logging disabled: {err}");
    }

    let kv = SqliteKvStore::open(&config.db_path)?;
    let store = NoteStore::new(kv, config.storage_key.as_str());
    let view = TerminalView::new(io::stdin().lock(), io::stderr());
    let mut service = NoteService::new(store, view);

    let report = execute(&mut service, command)?;

    if let Some(rendered) = service.view().last_render() {
        print!("{rendered}");
    }
    if let Some(message) = report.message() {
        if report.exit_code() == 0 {
            println!("{message}");
        } else {
            warn!("event=cli_command module=cli status=rejected");
            eprintln!("wordnote: {message}");
        }
    }
    Ok(report.exit_code())
}
