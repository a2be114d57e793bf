pub mod activity_repo;
pub mod seed;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::Catalog;

/// Shared in-memory catalog handed to the router as state.
///
/// Readers take the shared lock; every check-then-modify runs under the
/// exclusive lock so two mutations of the same roster never interleave.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    catalog: Arc<RwLock<Catalog>>,
}

impl ActivityStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Store loaded with the school's reference activities.
    pub fn seeded() -> Self {
        Self::new(seed::reference_catalog())
    }

    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        f(&*self.catalog.read())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> R {
        f(&mut *self.catalog.write())
    }

    pub fn len(&self) -> usize {
        self.read(Catalog::len)
    }

    pub fn is_empty(&self) -> bool {
        self.read(Catalog::is_empty)
    }
}
