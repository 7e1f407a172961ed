//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate entity validation and repository calls.
//! - Apply the listing pagination policy.
//!
//! # Invariants
//! - Services never bypass repository contracts.
//! - Services remain storage-agnostic.

use crate::model::ValidationError;
use crate::repo::{Page, RepoError};
use thiserror::Error;

pub mod dictionary_service;
pub mod entry_service;

/// Limit applied when a caller asks for a non-positive page size.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for dictionary and entry use-cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input violates a domain invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Persistence-layer failure, including stored rows that no longer
    /// pass validation.
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl ServiceError {
    /// Returns whether the caller can fix the failure by changing input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns whether the failure names a record that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Repo(RepoError::NotFound(_) | RepoError::DictionaryNotFound(_))
        )
    }
}

/// Normalizes raw skip/limit input into a repository page.
///
/// Negative `skip` becomes 0 and a non-positive `limit` becomes
/// `DEFAULT_PAGE_LIMIT`; values above `u32::MAX` saturate.
pub fn normalize_page(skip: i64, limit: i64) -> Page {
    let skip = u32::try_from(skip.max(0)).unwrap_or(u32::MAX);
    let limit = if limit <= 0 {
        DEFAULT_PAGE_LIMIT
    } else {
        u32::try_from(limit).unwrap_or(u32::MAX)
    };
    Page::new(skip, limit)
}
