//! Schema migrations for the wordbook database.
//!
//! # Invariants
//! - Steps are ordered by strictly increasing `version`, starting at 1.
//! - After each step `PRAGMA user_version` equals that step's version, and
//!   all pending steps commit or roll back together.

use crate::db::{DbError, DbResult};
use log::{debug, info};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const SCHEMA_STEPS: &[SchemaStep] = &[
    SchemaStep {
        version: 1,
        name: "dictionaries_and_entries",
        sql: include_str!("0001_init.sql"),
    },
    SchemaStep {
        version: 2,
        name: "lookup_indexes",
        sql: include_str!("0002_indexes.sql"),
    },
];

/// Schema version this build creates and expects.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |step| step.version)
}

/// Steps not yet applied to a database at `version`.
fn pending_steps(version: u32) -> &'static [SchemaStep] {
    let applied = SCHEMA_STEPS
        .iter()
        .take_while(|step| step.version <= version)
        .count();
    &SCHEMA_STEPS[applied..]
}

/// Brings the schema up to `latest_version()`.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file was written by a newer build.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let from_version = current_user_version(conn)?;
    let latest = latest_version();
    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }

    let steps = pending_steps(from_version);
    if steps.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for step in steps {
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.version)?;
        debug!(
            "event=db_migrate_step module=db status=ok version={} name={}",
            step.version, step.name
        );
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={from_version} to_version={latest}");
    Ok(())
}

/// Reads `PRAGMA user_version`; 0 means an unprepared database.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
