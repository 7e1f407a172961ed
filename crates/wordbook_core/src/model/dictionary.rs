//! Dictionary domain model.
//!
//! # Responsibility
//! - Define a named collection bound to a source/target language pair.
//! - Provide the only mutation path (`UpdatableEntity::update`).
//!
//! # Invariants
//! - `name` is trimmed and never empty.
//! - Language codes are trimmed, lowercase and at least two characters.
//! - `id` and `created_at` never change after construction.

use crate::model::validation::{
    language_code, non_nil, required_name, ValidationError, ValidationResult,
};
use crate::model::UpdatableEntity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a dictionary.
pub type DictionaryId = Uuid;

/// Named collection of translation entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DictionaryRecord")]
pub struct Dictionary {
    id: DictionaryId,
    name: String,
    description: Option<String>,
    source_language: String,
    target_language: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Dictionary {
    /// Creates a dictionary with a generated id and current timestamps.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is blank.
    /// - `LanguageTooShort` when either language code has fewer than two
    ///   characters after trimming.
    pub fn new(
        name: &str,
        source_language: &str,
        target_language: &str,
        description: Option<String>,
    ) -> ValidationResult<Self> {
        Self::with_id(
            Uuid::new_v4(),
            name,
            source_language,
            target_language,
            description,
        )
    }

    /// Creates a dictionary with a caller-provided id.
    ///
    /// Used when rebuilding a dictionary from storage or an import.
    pub fn with_id(
        id: DictionaryId,
        name: &str,
        source_language: &str,
        target_language: &str,
        description: Option<String>,
    ) -> ValidationResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id: non_nil(id)?,
            name: required_name(name)?,
            description,
            source_language: language_code("source_language", source_language)?,
            target_language: language_code("target_language", target_language)?,
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

    pub fn id(&self) -> DictionaryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Partial update for a dictionary. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub source_language: Option<String>,
    pub target_language: Option<String>,
}

impl DictionaryChanges {
    /// Returns whether no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.source_language.is_none()
            && self.target_language.is_none()
    }
}

impl UpdatableEntity for Dictionary {
    type Changes = DictionaryChanges;

    fn update(&mut self, changes: DictionaryChanges) -> ValidationResult<()> {
        let name = changes.name.as_deref().map(required_name).transpose()?;
        let source_language = changes
            .source_language
            .as_deref()
            .map(|value| language_code("source_language", value))
            .transpose()?;
        let target_language = changes
            .target_language
            .as_deref()
            .map(|value| language_code("target_language", value))
            .transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(source_language) = source_language {
            self.source_language = source_language;
        }
        if let Some(target_language) = target_language {
            self.target_language = target_language;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[derive(Deserialize)]
struct DictionaryRecord {
    id: DictionaryId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    source_language: String,
    target_language: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DictionaryRecord> for Dictionary {
    type Error = ValidationError;

    fn try_from(record: DictionaryRecord) -> Result<Self, Self::Error> {
        Ok(Self::with_id(
            record.id,
            &record.name,
            &record.source_language,
            &record.target_language,
            record.description,
        )?
        .with_timestamps(record.created_at, record.updated_at))
    }
}
