//! Dictionary repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Translate `Dictionary` values to and from `dictionaries` rows.
//! - Return entities as read back from storage after every write.
//!
//! # Invariants
//! - `update` never touches `id` or `created_at`.
//! - Deleting a dictionary removes its entries through the FK cascade.

use crate::model::{Dictionary, DictionaryId};
use crate::repo::{
    constraint_violation, ensure_connection_ready, from_epoch_ms, parse_uuid, to_epoch_ms,
    ConstraintKind, Page, RepoError, RepoResult,
};
use rusqlite::{params, Connection, Row};

const DICTIONARY_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    source_language,
    target_language,
    created_at,
    updated_at
FROM dictionaries";

const DICTIONARY_COLUMNS: &[&str] = &[
    "id",
    "name",
    "description",
    "source_language",
    "target_language",
    "created_at",
    "updated_at",
];

/// Repository interface for dictionary persistence.
pub trait DictionaryRepository {
    /// Persists a new dictionary and returns the stored state.
    fn create(&self, dictionary: &Dictionary) -> RepoResult<Dictionary>;
    /// Gets one dictionary, or `None` when the id is unknown.
    fn get_by_id(&self, id: DictionaryId) -> RepoResult<Option<Dictionary>>;
    /// Lists dictionaries in insertion order.
    fn get_all(&self, page: Page) -> RepoResult<Vec<Dictionary>>;
    /// Overwrites the mutable fields of an existing dictionary.
    ///
    /// Fails with `RepoError::NotFound` when no row has this id.
    fn update(&self, dictionary: &Dictionary) -> RepoResult<Dictionary>;
    /// Deletes a dictionary and its entries. Returns whether a row was removed.
    fn delete(&self, id: DictionaryId) -> RepoResult<bool>;
}

/// SQLite-backed dictionary repository.
pub struct SqliteDictionaryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDictionaryRepository<'conn> {
    /// Constructs a repository over a connection prepared by `db::open_*`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "dictionaries", DICTIONARY_COLUMNS)?;
        Ok(Self { conn })
    }

    fn read_back(&self, id: DictionaryId, context: &'static str) -> RepoResult<Dictionary> {
        self.get_by_id(id)?
            .ok_or(RepoError::InconsistentState(context))
    }
}

impl DictionaryRepository for SqliteDictionaryRepository<'_> {
    fn create(&self, dictionary: &Dictionary) -> RepoResult<Dictionary> {
        let inserted = self.conn.execute(
            "INSERT INTO dictionaries (
                id,
                name,
                description,
                source_language,
                target_language,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                dictionary.id().to_string(),
                dictionary.name(),
                dictionary.description(),
                dictionary.source_language(),
                dictionary.target_language(),
                to_epoch_ms(dictionary.created_at()),
                to_epoch_ms(dictionary.updated_at()),
            ],
        );

        if let Err(err) = inserted {
            return Err(match constraint_violation(&err) {
                Some(ConstraintKind::PrimaryKey) => RepoError::AlreadyExists(dictionary.id()),
                _ => err.into(),
            });
        }

        self.read_back(dictionary.id(), "created dictionary not found in read-back")
    }

    fn get_by_id(&self, id: DictionaryId) -> RepoResult<Option<Dictionary>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DICTIONARY_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_dictionary_row(row)?));
        }

        Ok(None)
    }

    fn get_all(&self, page: Page) -> RepoResult<Vec<Dictionary>> {
        let mut stmt = self.conn.prepare(&format!(
            "{DICTIONARY_SELECT_SQL} ORDER BY rowid ASC LIMIT ?1 OFFSET ?2;"
        ))?;

        let mut rows = stmt.query(params![i64::from(page.limit), i64::from(page.skip)])?;
        let mut dictionaries = Vec::new();
        while let Some(row) = rows.next()? {
            dictionaries.push(parse_dictionary_row(row)?);
        }

        Ok(dictionaries)
    }

    fn update(&self, dictionary: &Dictionary) -> RepoResult<Dictionary> {
        let changed = self.conn.execute(
            "UPDATE dictionaries
             SET
                name = ?1,
                description = ?2,
                source_language = ?3,
                target_language = ?4,
                updated_at = ?5
             WHERE id = ?6;",
            params![
                dictionary.name(),
                dictionary.description(),
                dictionary.source_language(),
                dictionary.target_language(),
                to_epoch_ms(dictionary.updated_at()),
                dictionary.id().to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(dictionary.id()));
        }

        self.read_back(dictionary.id(), "updated dictionary not found in read-back")
    }

    fn delete(&self, id: DictionaryId) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM dictionaries WHERE id = ?1;", [id.to_string()])?;
        Ok(removed > 0)
    }
}

fn parse_dictionary_row(row: &Row<'_>) -> RepoResult<Dictionary> {
    let id_text: String = row.get("id")?;
    let id = parse_uuid(&id_text, "dictionaries.id")?;
    let name: String = row.get("name")?;
    let source_language: String = row.get("source_language")?;
    let target_language: String = row.get("target_language")?;
    let created_at = from_epoch_ms(row.get("created_at")?, "dictionaries.created_at")?;
    let updated_at = from_epoch_ms(row.get("updated_at")?, "dictionaries.updated_at")?;

    let dictionary = Dictionary::with_id(
        id,
        &name,
        &source_language,
        &target_language,
        row.get("description")?,
    )?
    .with_timestamps(created_at, updated_at);
    Ok(dictionary)
}
