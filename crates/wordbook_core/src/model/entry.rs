//! Entry domain model.
//!
//! # Invariants
//! - `original_text` and `translated_text` are trimmed and never empty.
//! - `dictionary_id` is fixed at construction; entries have no update path.

use crate::model::dictionary::DictionaryId;
use crate::model::validation::{non_nil, required_text, ValidationError, ValidationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an entry.
pub type EntryId = Uuid;

/// One original/translated text pair owned by a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord")]
pub struct Entry {
    id: EntryId,
    dictionary_id: DictionaryId,
    original_text: String,
    translated_text: String,
    usage_example: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Entry {
    /// Creates an entry with a generated id and current timestamps.
    ///
    /// The owning dictionary is not looked up here; storage enforces it.
    ///
    /// # Errors
    /// - `EmptyText` naming `original_text` or `translated_text` when blank.
    pub fn new(
        dictionary_id: DictionaryId,
        original_text: &str,
        translated_text: &str,
        usage_example: Option<String>,
        notes: Option<String>,
    ) -> ValidationResult<Self> {
        Self::with_id(
            Uuid::new_v4(),
            dictionary_id,
            original_text,
            translated_text,
            usage_example,
            notes,
        )
    }

    /// Creates an entry with a caller-provided id.
    pub fn with_id(
        id: EntryId,
        dictionary_id: DictionaryId,
        original_text: &str,
        translated_text: &str,
        usage_example: Option<String>,
        notes: Option<String>,
    ) -> ValidationResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: non_nil(id)?,
            dictionary_id,
            original_text: required_text("original_text", original_text)?,
            translated_text: required_text("translated_text", translated_text)?,
            usage_example,
            notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces both timestamps, e.g. with values loaded from storage.
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn dictionary_id(&self) -> DictionaryId {
        self.dictionary_id
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn usage_example(&self) -> Option<&str> {
        self.usage_example.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[derive(Deserialize)]
struct EntryRecord {
    id: EntryId,
    dictionary_id: DictionaryId,
    original_text: String,
    translated_text: String,
    #[serde(default)]
    usage_example: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EntryRecord> for Entry {
    type Error = ValidationError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        Ok(Self::with_id(
            record.id,
            record.dictionary_id,
            &record.original_text,
            &record.translated_text,
            record.usage_example,
            record.notes,
        )?
        .with_timestamps(record.created_at, record.updated_at))
    }
}
