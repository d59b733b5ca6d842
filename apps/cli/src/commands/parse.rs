//! Turns one typed line into a [`Command`].
//!
//! Arguments are whitespace separated, except that the trailing free text of
//! a command (a description, a client value) is taken verbatim.

use std::path::PathBuf;

use quote_core::validation::parse_hours;
use quote_core::{ClientField, ProjectCategory, ProjectField, ValidationError};

use super::Command;
use crate::error::{AppError, AppResult};

/// Splits off the first word; the rest is returned trimmed.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn usage(text: &str) -> AppError {
    AppError::validation(format!("Usage: {text}"))
}

/// Parses `line`. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> AppResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = split_word(line);
    let command = match name.to_ascii_lowercase().as_str() {
        "client" => parse_client(rest)?,
        "project" => parse_project(rest)?,
        "vat" => Command::Vat(parse_switch(rest)?),
        "add" => parse_add(rest)?,
        "edit" => parse_edit(rest)?,
        "remove" | "rm" => {
            if rest.is_empty() {
                return Err(usage("remove <row>"));
            }
            Command::Remove {
                row: rest.to_string(),
            }
        }
        "show" | "ls" => Command::Show,
        "categories" => Command::Categories,
        "export" => Command::Export {
            dir: (!rest.is_empty()).then(|| PathBuf::from(rest)),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(AppError::validation(format!(
                "Unknown command '{other}'. Type 'help' for the list of commands."
            )))
        }
    };

    Ok(Some(command))
}

fn parse_client(rest: &str) -> AppResult<Command> {
    let (field, value) = split_word(rest);
    if field.is_empty() {
        return Err(usage("client <name|tax-id|address|phone|email|pec> [value]"));
    }
    Ok(Command::Client {
        field: field.parse::<ClientField>()?,
        value: value.to_string(),
    })
}

fn parse_project(rest: &str) -> AppResult<Command> {
    let (field, value) = split_word(rest);
    match field.to_ascii_lowercase().as_str() {
        "" => Err(usage("project <name|description|type> [value]")),
        "type" | "category" => {
            let category = match value {
                "" | "none" | "-" => None,
                key => Some(key.parse::<ProjectCategory>()?),
            };
            Ok(Command::Category(category))
        }
        _ => Ok(Command::Project {
            field: field.parse::<ProjectField>()?,
            value: value.to_string(),
        }),
    }
}

fn parse_switch(value: &str) -> AppResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Ok(true),
        "off" | "no" | "false" | "0" => Ok(false),
        _ => Err(usage("vat <on|off>")),
    }
}

fn parse_add(rest: &str) -> AppResult<Command> {
    let (hours, description) = split_word(rest);
    if hours.is_empty() {
        return Err(usage("add <hours> <description>"));
    }
    Ok(Command::Add {
        hours: parse_hours(hours)?,
        description: description.to_string(),
    })
}

fn parse_edit(rest: &str) -> AppResult<Command> {
    const USAGE: &str = "edit <row> <description|hours> <value>";

    let (row, rest) = split_word(rest);
    let (field, value) = split_word(rest);
    if row.is_empty() || field.is_empty() {
        return Err(usage(USAGE));
    }

    match field.to_ascii_lowercase().as_str() {
        "description" | "desc" => Ok(Command::EditDescription {
            row: row.to_string(),
            description: value.to_string(),
        }),
        "hours" | "h" => Ok(Command::EditHours {
            row: row.to_string(),
            hours: parse_edited_hours(value)?,
        }),
        _ => Err(usage(USAGE)),
    }
}

/// Any number is accepted when editing; the quote clamps negatives to zero.
fn parse_edited_hours(value: &str) -> AppResult<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| {
            ValidationError::InvalidFormat {
                field: "hours".to_string(),
                reason: format!("'{}' is not a number", value.trim()),
            }
            .into()
        })
}
