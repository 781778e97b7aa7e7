//! Key-value persistence for ordered entity lists.
//!
//! # Responsibility
//! - Persist one JSON array per string key, replacing it wholesale.
//! - Hide the storage backend behind the `ListStore` contract.
//!
//! # Invariants
//! - `load` never fails: absent, corrupt or mis-shaped data reads as empty.
//! - `save` always overwrites the full list for its key.
//! - Payloads are plain structural JSON with no version stamp.

use crate::db::DbError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryListStore;
pub use sqlite::SqliteListStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while writing a list.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize list payload: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Raw string storage underneath a `ListStore`.
///
/// Backends only move opaque text; JSON handling lives in the blanket
/// `ListStore` implementation so every backend decodes identically.
pub trait RawStore {
    fn read_raw(&self, key: &str) -> StoreResult<Option<String>>;
    fn write_raw(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<R: RawStore + ?Sized> RawStore for &R {
    fn read_raw(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).read_raw(key)
    }

    fn write_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).write_raw(key, value)
    }
}

/// Persistence contract consumed by collection controllers.
pub trait ListStore {
    /// Loads the list stored under `key`, or an empty list.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T>;

    /// Replaces the list stored under `key`.
    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()>;
}

impl<R: RawStore> ListStore for R {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.read_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                log::warn!(
                    "event=store_load module=store status=error key={key} error_code=read_failed error={err}"
                );
                return Vec::new();
            }
        };

        decode_list(key, &raw)
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()> {
        let payload = serde_json::to_string(items)?;
        self.write_raw(key, &payload)?;
        log::debug!(
            "event=store_save module=store status=ok key={key} count={} bytes={}",
            items.len(),
            payload.len()
        );
        Ok(())
    }
}

fn decode_list<T: DeserializeOwned>(key: &str, raw: &str) -> Vec<T> {
    // `null` is what an unset browser-style slot serializes to.
    match serde_json::from_str::<Option<Vec<T>>>(raw) {
        Ok(items) => items.unwrap_or_default(),
        Err(err) => {
            log::warn!(
                "event=store_load module=store status=error key={key} error_code=corrupt_payload error={err}"
            );
            Vec::new()
        }
    }
}
