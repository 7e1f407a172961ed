//! Core domain logic for Wordbook personal dictionaries.
//! This crate is the single source of truth for dictionary and entry invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::{
    Dictionary, DictionaryChanges, DictionaryId, Entry, EntryId, UpdatableEntity,
    ValidationError, ValidationResult,
};
pub use repo::dictionary_repo::{DictionaryRepository, SqliteDictionaryRepository};
pub use repo::entry_repo::{EntryRepository, SqliteEntryRepository};
pub use repo::memory::{MemoryDictionaryRepository, MemoryEntryRepository, MemoryStore};
pub use repo::{Page, RepoError, RepoResult};
pub use service::dictionary_service::DictionaryService;
pub use service::entry_service::EntryService;
pub use service::{normalize_page, ServiceError, ServiceResult, DEFAULT_PAGE_LIMIT};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
