//! Entry repository contract and SQLite implementation.
//!
//! # Invariants
//! - Entries are never written without an existing owning dictionary; the
//!   FK rejection surfaces as `RepoError::DictionaryNotFound`.
//! - There is no update or delete path; entries leave storage only through
//!   their dictionary's cascade.

use crate::model::{DictionaryId, Entry, EntryId};
use crate::repo::{
    constraint_violation, ensure_connection_ready, from_epoch_ms, parse_uuid, to_epoch_ms,
    ConstraintKind, Page, RepoError, RepoResult,
};
use rusqlite::{params, Connection, Row};

const ENTRY_SELECT_SQL: &str = "SELECT
    id,
    dictionary_id,
    original_text,
    translated_text,
    usage_example,
    notes,
    created_at,
    updated_at
FROM entries";

const ENTRY_COLUMNS: &[&str] = &[
    "id",
    "dictionary_id",
    "original_text",
    "translated_text",
    "usage_example",
    "notes",
    "created_at",
    "updated_at",
];

/// Repository interface for entry persistence.
pub trait EntryRepository {
    /// Persists a new entry and returns the stored state.
    fn create(&self, entry: &Entry) -> RepoResult<Entry>;
    /// Gets one entry, or `None` when the id is unknown.
    fn get_by_id(&self, id: EntryId) -> RepoResult<Option<Entry>>;
    /// Lists one dictionary's entries in insertion order.
    fn get_by_dictionary(&self, dictionary_id: DictionaryId, page: Page)
        -> RepoResult<Vec<Entry>>;
}

/// SQLite-backed entry repository.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Constructs a repository over a connection prepared by `db::open_*`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "entries", ENTRY_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn create(&self, entry: &Entry) -> RepoResult<Entry> {
        let inserted = self.conn.execute(
            "INSERT INTO entries (
                id,
                dictionary_id,
                original_text,
                translated_text,
                usage_example,
                notes,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                entry.id().to_string(),
                entry.dictionary_id().to_string(),
                entry.original_text(),
                entry.translated_text(),
                entry.usage_example(),
                entry.notes(),
                to_epoch_ms(entry.created_at()),
                to_epoch_ms(entry.updated_at()),
            ],
        );

        if let Err(err) = inserted {
            return Err(match constraint_violation(&err) {
                Some(ConstraintKind::ForeignKey) => {
                    RepoError::DictionaryNotFound(entry.dictionary_id())
                }
                Some(ConstraintKind::PrimaryKey) => RepoError::AlreadyExists(entry.id()),
                None => err.into(),
            });
        }

        self.get_by_id(entry.id())?
            .ok_or(RepoError::InconsistentState(
                "created entry not found in read-back",
            ))
    }

    fn get_by_id(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_entry_row(row)?));
        }

        Ok(None)
    }

    fn get_by_dictionary(
        &self,
        dictionary_id: DictionaryId,
        page: Page,
    ) -> RepoResult<Vec<Entry>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ENTRY_SELECT_SQL}
             WHERE dictionary_id = ?1
             ORDER BY rowid ASC
             LIMIT ?2 OFFSET ?3;"
        ))?;

        let mut rows = stmt.query(params![
            dictionary_id.to_string(),
            i64::from(page.limit),
            i64::from(page.skip),
        ])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<Entry> {
    let id_text: String = row.get("id")?;
    let id = parse_uuid(&id_text, "entries.id")?;
    let dictionary_id_text: String = row.get("dictionary_id")?;
    let dictionary_id = parse_uuid(&dictionary_id_text, "entries.dictionary_id")?;
    let original_text: String = row.get("original_text")?;
    let translated_text: String = row.get("translated_text")?;
    let created_at = from_epoch_ms(row.get("created_at")?, "entries.created_at")?;
    let updated_at = from_epoch_ms(row.get("updated_at")?, "entries.updated_at")?;

    let entry = Entry::with_id(
        id,
        dictionary_id,
        &original_text,
        &translated_text,
        row.get("usage_example")?,
        row.get("notes")?,
    )?
    .with_timestamps(created_at, updated_at);
    Ok(entry)
}
