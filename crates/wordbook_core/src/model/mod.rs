//! Domain model for dictionaries and their entries.
//!
//! # Responsibility
//! - Define the canonical records handled by repositories and services.
//! - Own field-level invariants through validating constructors.
//!
//! # Invariants
//! - Every entity is identified by a stable, non-nil UUID.
//! - An entity value never holds a field that failed validation.

pub mod dictionary;
pub mod entry;
pub mod validation;

pub use dictionary::{Dictionary, DictionaryChanges, DictionaryId};
pub use entry::{Entry, EntryId};
pub use validation::{ValidationError, ValidationResult};

/// Capability for entities that support an in-place update transition.
///
/// Only `Dictionary` implements it; entries are create-and-read only.
pub trait UpdatableEntity {
    /// Partial change set accepted by `update`.
    type Changes;

    /// Applies `changes`, re-validating every supplied field.
    ///
    /// On error the entity is left untouched.
    fn update(&mut self, changes: Self::Changes) -> ValidationResult<()>;
}
