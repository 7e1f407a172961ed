//! In-memory repository doubles.
//!
//! Both repositories share one `MemoryStore`, the same way the SQLite
//! repositories share one connection, so the dictionary cascade and the
//! entry ownership check behave like the SQLite backend.

use crate::model::{Dictionary, DictionaryId, Entry, EntryId};
use crate::repo::dictionary_repo::DictionaryRepository;
use crate::repo::entry_repo::EntryRepository;
use crate::repo::{Page, RepoError, RepoResult};
use chrono::{DateTime, SubsecRound, Utc};
use std::cell::RefCell;

/// Shared backing store for the in-memory repositories.
///
/// Rows are kept in insertion order. Not thread-safe.
#[derive(Debug, Default)]
pub struct MemoryStore {
    dictionaries: RefCell<Vec<Dictionary>>,
    entries: RefCell<Vec<Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries across all dictionaries.
    pub fn entry_count(&self) -> usize {
        self.entries.borrow().len()
    }
}

/// Millisecond precision, matching what the SQLite columns keep.
fn stored_instant(value: DateTime<Utc>) -> DateTime<Utc> {
    value.trunc_subsecs(3)
}

fn stored_dictionary(dictionary: &Dictionary, created_at: DateTime<Utc>) -> Dictionary {
    dictionary.clone().with_timestamps(
        stored_instant(created_at),
        stored_instant(dictionary.updated_at()),
    )
}

fn page_of<T>(items: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    items
        .skip(page.skip as usize)
        .take(page.limit as usize)
        .collect()
}

/// In-memory `DictionaryRepository`.
pub struct MemoryDictionaryRepository<'store> {
    store: &'store MemoryStore,
}

impl<'store> MemoryDictionaryRepository<'store> {
    pub fn new(store: &'store MemoryStore) -> Self {
        Self { store }
    }
}

impl DictionaryRepository for MemoryDictionaryRepository<'_> {
    fn create(&self, dictionary: &Dictionary) -> RepoResult<Dictionary> {
        let mut dictionaries = self.store.dictionaries.borrow_mut();
        if dictionaries.iter().any(|item| item.id() == dictionary.id()) {
            return Err(RepoError::AlreadyExists(dictionary.id()));
        }
        let stored = stored_dictionary(dictionary, dictionary.created_at());
        dictionaries.push(stored.clone());
        Ok(stored)
    }

    fn get_by_id(&self, id: DictionaryId) -> RepoResult<Option<Dictionary>> {
        Ok(self
            .store
            .dictionaries
            .borrow()
            .iter()
            .find(|item| item.id() == id)
            .cloned())
    }

    fn get_all(&self, page: Page) -> RepoResult<Vec<Dictionary>> {
        Ok(page_of(self.store.dictionaries.borrow().iter().cloned(), page))
    }

    fn update(&self, dictionary: &Dictionary) -> RepoResult<Dictionary> {
        let mut dictionaries = self.store.dictionaries.borrow_mut();
        let stored = dictionaries
            .iter_mut()
            .find(|item| item.id() == dictionary.id())
            .ok_or(RepoError::NotFound(dictionary.id()))?;

        // Keep the stored creation time, like the SQLite UPDATE does.
        *stored = stored_dictionary(dictionary, stored.created_at());
        Ok(stored.clone())
    }

    fn delete(&self, id: DictionaryId) -> RepoResult<bool> {
        let mut dictionaries = self.store.dictionaries.borrow_mut();
        let before = dictionaries.len();
        dictionaries.retain(|item| item.id() != id);
        if dictionaries.len() == before {
            return Ok(false);
        }

        self.store
            .entries
            .borrow_mut()
            .retain(|entry| entry.dictionary_id() != id);
        Ok(true)
    }
}

/// In-memory `EntryRepository`.
pub struct MemoryEntryRepository<'store> {
    store: &'store MemoryStore,
}

impl<'store> MemoryEntryRepository<'store> {
    pub fn new(store: &'store MemoryStore) -> Self {
        Self { store }
    }
}

impl EntryRepository for MemoryEntryRepository<'_> {
    fn create(&self, entry: &Entry) -> RepoResult<Entry> {
        let owner_exists = self
            .store
            .dictionaries
            .borrow()
            .iter()
            .any(|item| item.id() == entry.dictionary_id());
        if !owner_exists {
            return Err(RepoError::DictionaryNotFound(entry.dictionary_id()));
        }

        let mut entries = self.store.entries.borrow_mut();
        if entries.iter().any(|item| item.id() == entry.id()) {
            return Err(RepoError::AlreadyExists(entry.id()));
        }
        let stored = entry.clone().with_timestamps(
            stored_instant(entry.created_at()),
            stored_instant(entry.updated_at()),
        );
        entries.push(stored.clone());
        Ok(stored)
    }

    fn get_by_id(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        Ok(self
            .store
            .entries
            .borrow()
            .iter()
            .find(|item| item.id() == id)
            .cloned())
    }

    fn get_by_dictionary(
        &self,
        dictionary_id: DictionaryId,
        page: Page,
    ) -> RepoResult<Vec<Entry>> {
        let entries = self.store.entries.borrow();
        Ok(page_of(
            entries
                .iter()
                .filter(|item| item.dictionary_id() == dictionary_id)
                .cloned(),
            page,
        ))
    }
}
