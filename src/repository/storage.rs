//! Flat-file persistence: one JSON document per collection

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{Book, FineTicket, Manager, Member},
};

/// The four persisted entity sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Managers,
    Members,
    Books,
    Fines,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Managers => "managers",
            Collection::Members => "members",
            Collection::Books => "books",
            Collection::Fines => "fines",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Borrowed view of the whole library state, written in one pass
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub managers: &'a [Manager],
    pub members: &'a [Member],
    pub books: &'a [Book],
    pub fines: &'a [FineTicket],
}

/// JSON document store rooted at a data directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }

    /// Load a collection. A missing file is an empty collection.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> AppResult<Vec<T>> {
        let path = self.path(collection);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No {} file at {}, starting empty", collection, path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(AppError::storage(&path, e)),
        };

        let items: Vec<T> =
            serde_json::from_slice(&bytes).map_err(|e| AppError::storage(&path, e))?;
        tracing::debug!("Loaded {} {} from {}", items.len(), collection, path.display());
        Ok(items)
    }

    /// Serialize a collection, overwriting the previous document in place
    pub fn save<T: Serialize>(&self, collection: Collection, items: &[T]) -> AppResult<()> {
        let path = self.path(collection);
        let mut bytes =
            serde_json::to_vec_pretty(items).map_err(|e| AppError::storage(&path, e))?;
        bytes.push(b'\n');
        fs::write(&path, bytes).map_err(|e| AppError::storage(&path, e))?;
        tracing::debug!("Saved {} {} to {}", items.len(), collection, path.display());
        Ok(())
    }

    /// Write all four collections, stopping at the first failure.
    /// There is no cross-file transaction.
    pub fn save_all(&self, snapshot: Snapshot<'_>) -> AppResult<()> {
        self.save(Collection::Managers, snapshot.managers)?;
        self.save(Collection::Members, snapshot.members)?;
        self.save(Collection::Books, snapshot.books)?;
        self.save(Collection::Fines, snapshot.fines)
    }
}
