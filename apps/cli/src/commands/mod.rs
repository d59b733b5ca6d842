//! # Commands
//!
//! What the user can type, and the loop that reads it.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  stdin line ──► parse_command() ──► Command ──► execute() ──► reply     │
//! │                      │                              │                   │
//! │                      ▼                              ▼                   │
//! │                 AppError ────────────────────► "[CODE] message"         │
//! │                                                (session continues)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`parse`] - Line parsing
//! - [`details`] - Client, project and VAT fields
//! - [`items`] - Adding, editing and removing rows
//! - [`export`] - The summary view and PDF export

pub mod details;
pub mod export;
pub mod items;
pub mod parse;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use quote_core::{ClientField, IdGenerator, ProjectCategory, ProjectField};
use tracing::debug;

use crate::error::AppResult;
use crate::state::Session;

pub use parse::parse_command;

/// One thing the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Client { field: ClientField, value: String },
    Project { field: ProjectField, value: String },
    Category(Option<ProjectCategory>),
    Vat(bool),
    Add { hours: f64, description: String },
    EditDescription { row: String, description: String },
    EditHours { row: String, hours: f64 },
    Remove { row: String },
    Show,
    Categories,
    Export { dir: Option<PathBuf> },
    Help,
    Quit,
}

/// What the loop does after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

pub const HELP: &str = "\
Commands:
  client <name|tax-id|address|phone|email|pec> [value]   set or clear a client field
  project <name|description> [value]                     set or clear a project field
  project type <category|none>                           set the project type
  vat <on|off>                                           add VAT on top of the subtotal
  add <hours> <description>                              add an activity
  edit <row> description <text>                          change an activity's description
  edit <row> hours <hours>                               change an activity's hours
  remove <row>                                           delete an activity
  show                                                   show the quote and its totals
  categories                                             list project types
  export [dir]                                           write Quote_<project>.pdf
  help                                                   show this help
  quit                                                   leave

Rows are the numbers shown by 'show', or item ids.";

/// Applies `command` to the session.
pub fn execute<G: IdGenerator>(
    session: &mut Session<G>,
    command: Command,
    issue_date: NaiveDate,
) -> AppResult<Outcome> {
    debug!(?command, "execute");

    let reply = match command {
        Command::Client { field, value } => details::set_client(session, field, value),
        Command::Project { field, value } => details::set_project(session, field, value),
        Command::Category(category) => details::set_category(session, category),
        Command::Vat(applied) => details::set_vat(session, applied),
        Command::Add { hours, description } => items::add(session, &description, hours)?,
        Command::EditDescription { row, description } => {
            items::edit_description(session, &row, description)?
        }
        Command::EditHours { row, hours } => items::edit_hours(session, &row, hours)?,
        Command::Remove { row } => items::remove(session, &row)?,
        Command::Show => export::summary(session),
        Command::Categories => details::categories(),
        Command::Export { dir } => export::export(session, dir.as_deref(), issue_date)?,
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(Outcome::Quit),
    };

    Ok(Outcome::Reply(reply))
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Errors from individual commands are written to `output` and the session
/// continues; only I/O failures on the streams end the loop early.
pub fn run_interactive<G: IdGenerator, R: BufRead, W: Write>(
    session: &mut Session<G>,
    input: R,
    output: &mut W,
    issue_date: NaiveDate,
) -> AppResult<()> {
    writeln!(output, "Quote builder. Type 'help' for the list of commands.")?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let result =
            parse_command(&line).and_then(|command| match command {
                Some(command) => execute(session, command, issue_date).map(Some),
                None => Ok(None),
            });

        match result {
            Ok(Some(Outcome::Quit)) => return Ok(()),
            Ok(Some(Outcome::Reply(reply))) => writeln!(output, "{reply}")?,
            Ok(None) => {}
            Err(err) => {
                debug!(code = err.code.as_str(), "{}", err.message);
                writeln!(output, "{err}")?;
            }
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}
