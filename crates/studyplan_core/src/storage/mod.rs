//! Key-value storage adapter contracts.
//!
//! # Responsibility
//! - Define the get/set contract the entity store persists through.
//! - Fix the blob key layout shared with earlier product versions.
//!
//! # Invariants
//! - Each key maps to one JSON-serialized collection blob; there is no
//!   version field inside the blobs.
//! - Adapters never interpret blob contents.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite_kv;

pub use memory::MemoryKvStorage;
pub use sqlite_kv::SqliteKvStorage;

/// Blob key holding the JSON array of Subject records.
pub const SUBJECTS_KEY: &str = "studySchedule_subjects";
/// Blob key holding the JSON array of StudyEvent records.
pub const EVENTS_KEY: &str = "studySchedule_events";

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level error for key-value adapter operations.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated to schema version {expected_version} (found {actual_version})"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable key-value collaborator consumed by the entity store.
///
/// The two operations mirror a browser local-storage surface: `get` returns
/// the stored blob when present, `set` overwrites it unconditionally.
pub trait StorageAdapter {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: StorageAdapter + ?Sized> StorageAdapter for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
