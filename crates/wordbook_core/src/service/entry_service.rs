//! Entry use-case service.
//!
//! Entry creation does not look the owning dictionary up first; the
//! repository rejects unknown owners with `RepoError::DictionaryNotFound`.

use crate::model::{DictionaryId, Entry, EntryId};
use crate::repo::entry_repo::EntryRepository;
use crate::service::{normalize_page, ServiceResult};
use log::{debug, info};

/// Use-case service wrapper for entry operations.
pub struct EntryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and persists a new entry in `dictionary_id`.
    pub fn create_entry(
        &self,
        dictionary_id: DictionaryId,
        original_text: &str,
        translated_text: &str,
        usage_example: Option<String>,
        notes: Option<String>,
    ) -> ServiceResult<Entry> {
        let entry = Entry::new(
            dictionary_id,
            original_text,
            translated_text,
            usage_example,
            notes,
        )?;
        let created = self.repo.create(&entry)?;
        info!(
            "event=entry_create module=service status=ok entry_id={} dictionary_id={dictionary_id}",
            created.id()
        );
        Ok(created)
    }

    pub fn get_entry(&self, id: EntryId) -> ServiceResult<Option<Entry>> {
        Ok(self.repo.get_by_id(id)?)
    }

    /// Lists one dictionary's entries after normalizing `skip`/`limit`.
    pub fn get_dictionary_entries(
        &self,
        dictionary_id: DictionaryId,
        skip: i64,
        limit: i64,
    ) -> ServiceResult<Vec<Entry>> {
        let page = normalize_page(skip, limit);
        let entries = self.repo.get_by_dictionary(dictionary_id, page)?;
        debug!(
            "event=entry_list module=service status=ok dictionary_id={dictionary_id} count={}",
            entries.len()
        );
        Ok(entries)
    }
}
