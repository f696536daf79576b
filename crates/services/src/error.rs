//! Shared error types for the services crate.

use thiserror::Error;

use passport_core::model::{RegionError, StampRecordError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while reading a stored value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadError {
    #[error("malformed value under {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by progress writers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Region(#[from] RegionError),
    #[error(transparent)]
    StampRecord(#[from] StampRecordError),
    #[error("email cannot be empty")]
    EmptyEmail,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
