//! Dictionary use-case service.
//!
//! # Invariants
//! - Entities are validated before any repository call.
//! - Updating or reading an unknown id yields `None`, not an error.

use crate::model::{Dictionary, DictionaryChanges, DictionaryId, UpdatableEntity};
use crate::repo::dictionary_repo::DictionaryRepository;
use crate::service::{normalize_page, ServiceResult};
use log::{debug, info};

/// Use-case service wrapper for dictionary operations.
pub struct DictionaryService<R: DictionaryRepository> {
    repo: R,
}

impl<R: DictionaryRepository> DictionaryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and persists a new dictionary.
    pub fn create_dictionary(
        &self,
        name: &str,
        source_language: &str,
        target_language: &str,
        description: Option<String>,
    ) -> ServiceResult<Dictionary> {
        let dictionary = Dictionary::new(name, source_language, target_language, description)?;
        let created = self.repo.create(&dictionary)?;
        info!(
            "event=dictionary_create module=service status=ok dictionary_id={}",
            created.id()
        );
        Ok(created)
    }

    pub fn get_dictionary(&self, id: DictionaryId) -> ServiceResult<Option<Dictionary>> {
        Ok(self.repo.get_by_id(id)?)
    }

    /// Lists dictionaries after normalizing `skip`/`limit`.
    pub fn get_all_dictionaries(&self, skip: i64, limit: i64) -> ServiceResult<Vec<Dictionary>> {
        let page = normalize_page(skip, limit);
        let dictionaries = self.repo.get_all(page)?;
        debug!(
            "event=dictionary_list module=service status=ok skip={} limit={} count={}",
            page.skip,
            page.limit,
            dictionaries.len()
        );
        Ok(dictionaries)
    }

    /// Applies `changes` to an existing dictionary.
    ///
    /// Returns `Ok(None)` when `id` is unknown. Concurrent updates of the
    /// same dictionary are not serialized; the last write wins.
    pub fn update_dictionary(
        &self,
        id: DictionaryId,
        changes: DictionaryChanges,
    ) -> ServiceResult<Option<Dictionary>> {
        let Some(mut dictionary) = self.repo.get_by_id(id)? else {
            debug!("event=dictionary_update module=service status=missing dictionary_id={id}");
            return Ok(None);
        };

        dictionary.update(changes)?;
        let updated = self.repo.update(&dictionary)?;
        info!("event=dictionary_update module=service status=ok dictionary_id={id}");
        Ok(Some(updated))
    }

    /// Deletes a dictionary with its entries. Returns whether it existed.
    pub fn delete_dictionary(&self, id: DictionaryId) -> ServiceResult<bool> {
        let removed = self.repo.delete(id)?;
        info!("event=dictionary_delete module=service status=ok dictionary_id={id} removed={removed}");
        Ok(removed)
    }
}
