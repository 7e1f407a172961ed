//! Command dispatch for the `wordbook` binary.
//!
//! # Responsibility
//! - Enforce input length limits before any service call.
//! - Open one connection per invocation and hand it to the services.
//! - Render results as JSON values; absent records become `NotFound`.

use crate::args::{Command, DictCommand, EntryCommand};
use crate::error::CliError;
use log::debug;
use rusqlite::Connection;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;
use wordbook_core::db::open_db;
use wordbook_core::{
    core_version, ping, DictionaryChanges, DictionaryService, EntryService,
    SqliteDictionaryRepository, SqliteEntryRepository,
};

pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;
pub const MAX_LANGUAGE_CHARS: usize = 10;

/// Runs one command against the database at `db_path`.
pub fn execute(db_path: &Path, command: Command) -> Result<Value, CliError> {
    match command {
        Command::Ping => Ok(json!({ "ping": ping() })),
        Command::Version => Ok(json!({ "version": core_version() })),
        Command::Dict(command) => {
            check_dict_limits(&command)?;
            let conn = open_db(db_path)?;
            run_dict(&conn, command)
        }
        Command::Entry(command) => {
            let conn = open_db(db_path)?;
            run_entry(&conn, command)
        }
    }
}

fn run_dict(conn: &Connection, command: DictCommand) -> Result<Value, CliError> {
    let service = DictionaryService::new(SqliteDictionaryRepository::try_new(conn)?);
    match command {
        DictCommand::Create {
            name,
            source,
            target,
            description,
        } => {
            let created = service.create_dictionary(&name, &source, &target, description)?;
            to_value(&created)
        }
        DictCommand::Get { id } => match service.get_dictionary(id)? {
            Some(dictionary) => to_value(&dictionary),
            None => Err(dictionary_not_found(id)),
        },
        DictCommand::List(page) => {
            let dictionaries = service.get_all_dictionaries(page.skip, page.limit)?;
            let total = dictionaries.len();
            Ok(json!({ "dictionaries": dictionaries, "total": total }))
        }
        DictCommand::Update {
            id,
            name,
            description,
            source,
            target,
        } => {
            let changes = DictionaryChanges {
                name,
                description,
                source_language: source,
                target_language: target,
            };
            if changes.is_empty() {
                debug!("event=cli_dict_update module=cli status=noop dictionary_id={id}");
            }
            match service.update_dictionary(id, changes)? {
                Some(dictionary) => to_value(&dictionary),
                None => Err(dictionary_not_found(id)),
            }
        }
        DictCommand::Delete { id } => {
            if service.delete_dictionary(id)? {
                Ok(json!({ "deleted": id }))
            } else {
                Err(dictionary_not_found(id))
            }
        }
    }
}

fn run_entry(conn: &Connection, command: EntryCommand) -> Result<Value, CliError> {
    let service = EntryService::new(SqliteEntryRepository::try_new(conn)?);
    match command {
        EntryCommand::Add {
            dictionary_id,
            original,
            translated,
            example,
            notes,
        } => {
            let created =
                service.create_entry(dictionary_id, &original, &translated, example, notes)?;
            to_value(&created)
        }
        EntryCommand::Get { id } => match service.get_entry(id)? {
            Some(entry) => to_value(&entry),
            None => Err(CliError::NotFound { kind: "Entry", id }),
        },
        EntryCommand::List {
            dictionary_id,
            page,
        } => {
            let entries = service.get_dictionary_entries(dictionary_id, page.skip, page.limit)?;
            let total = entries.len();
            Ok(json!({ "entries": entries, "total": total }))
        }
    }
}

fn check_dict_limits(command: &DictCommand) -> Result<(), CliError> {
    match command {
        DictCommand::Create {
            name,
            source,
            target,
            description,
        } => {
            check_len("name", name, MAX_NAME_CHARS)?;
            check_len("source_language", source, MAX_LANGUAGE_CHARS)?;
            check_len("target_language", target, MAX_LANGUAGE_CHARS)?;
            check_optional_len("description", description.as_deref(), MAX_DESCRIPTION_CHARS)
        }
        DictCommand::Update {
            name,
            description,
            source,
            target,
            ..
        } => {
            check_optional_len("name", name.as_deref(), MAX_NAME_CHARS)?;
            check_optional_len("source_language", source.as_deref(), MAX_LANGUAGE_CHARS)?;
            check_optional_len("target_language", target.as_deref(), MAX_LANGUAGE_CHARS)?;
            check_optional_len("description", description.as_deref(), MAX_DESCRIPTION_CHARS)
        }
        DictCommand::Get { .. } | DictCommand::List(_) | DictCommand::Delete { .. } => Ok(()),
    }
}

fn check_optional_len(field: &'static str, value: Option<&str>, max: usize) -> Result<(), CliError> {
    value.map_or(Ok(()), |value| check_len(field, value, max))
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), CliError> {
    if value.chars().count() > max {
        return Err(CliError::TooLong { field, max });
    }
    Ok(())
}

fn dictionary_not_found(id: uuid::Uuid) -> CliError {
    CliError::NotFound {
        kind: "Dictionary",
        id,
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}
