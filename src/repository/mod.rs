//! Repository layer: the in-memory library backed by flat files
//!
//! `Library` owns the four collections and is the single source of truth
//! for the process. Every mutating operation writes the whole state back
//! through the [`JsonStore`] before returning. Domain methods live in the
//! per-collection submodules.

pub mod books;
pub mod fines;
pub mod managers;
pub mod members;
pub mod storage;

pub use members::BorrowedBook;
pub use storage::{Collection, JsonStore, Snapshot};

use serde::de::DeserializeOwned;

use crate::{
    config::{AdminConfig, SavePolicy, StorageConfig},
    error::{AppError, AppResult},
    models::{Book, Entity, FineTicket, Manager, Member},
};

/// Main repository struct holding the loaded collections
#[derive(Debug)]
pub struct Library {
    store: JsonStore,
    policy: SavePolicy,
    managers: Vec<Manager>,
    members: Vec<Member>,
    books: Vec<Book>,
    fines: Vec<FineTicket>,
}

impl Library {
    /// Open the library described by the storage configuration
    pub fn from_config(storage: &StorageConfig, admin: &AdminConfig) -> AppResult<Self> {
        Self::open(JsonStore::new(&storage.data_dir), storage.save_policy, admin)
    }

    /// Load every collection from `store`, seeding `admin` into an empty
    /// managers collection
    pub fn open(store: JsonStore, policy: SavePolicy, admin: &AdminConfig) -> AppResult<Self> {
        let mut library = Self {
            managers: load_collection(&store, Collection::Managers, policy)?,
            members: load_collection(&store, Collection::Members, policy)?,
            books: load_collection(&store, Collection::Books, policy)?,
            fines: load_collection(&store, Collection::Fines, policy)?,
            store,
            policy,
        };

        tracing::info!(
            "Library loaded from {}: {} members, {} books, {} fines",
            library.store.dir().display(),
            library.members.len(),
            library.books.len(),
            library.fines.len()
        );

        if library.managers.is_empty() {
            library.seed_manager(admin)?;
        }

        Ok(library)
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn fines(&self) -> &[FineTicket] {
        &self.fines
    }

    /// Write the full state, applying the configured save policy
    fn persist(&self) -> AppResult<()> {
        let snapshot = Snapshot {
            managers: &self.managers,
            members: &self.members,
            books: &self.books,
            fines: &self.fines,
        };

        match self.store.save_all(snapshot) {
            Ok(()) => Ok(()),
            Err(e) if self.policy == SavePolicy::Log => {
                tracing::error!("Failed to save library state: {}", e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Next id for a collection: highest present id plus one, or 1 when empty.
/// Ids below the maximum that were freed by a removal are not reused, but
/// the maximum itself is once its owner is gone. Fails once `i32::MAX` is taken.
pub fn next_id<T: Entity>(items: &[T]) -> AppResult<i32> {
    let max = items.iter().map(Entity::id).max().unwrap_or(0);
    max.checked_add(1)
        .ok_or_else(|| AppError::Validation(format!("No id left after {}", max)))
}

fn load_collection<T: DeserializeOwned>(
    store: &JsonStore,
    collection: Collection,
    policy: SavePolicy,
) -> AppResult<Vec<T>> {
    match store.load(collection) {
        Ok(items) => Ok(items),
        Err(e) if policy == SavePolicy::Log => {
            tracing::error!("Failed to load {}, starting empty: {}", collection, e);
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
