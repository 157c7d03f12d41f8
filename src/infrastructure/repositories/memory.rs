//! In-memory menu repository
//!
//! Holds a catalog in process memory. Used by embedders that load menus
//! from elsewhere and by tests.

use std::sync::RwLock;

use crate::domain::entities::MenuCatalog;
use crate::domain::ports::{MenuRepository, RepositoryError};

#[derive(Debug, Default)]
pub struct InMemoryMenuRepository {
    catalog: RwLock<MenuCatalog>,
}

impl InMemoryMenuRepository {
    pub fn new(catalog: MenuCatalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }
}

impl MenuRepository for InMemoryMenuRepository {
    fn load_catalog(&self) -> Result<MenuCatalog, RepositoryError> {
        self.catalog
            .read()
            .map(|c| c.clone())
            .map_err(|e| RepositoryError::AccessError {
                message: e.to_string(),
            })
    }

    fn save_catalog(&self, catalog: &MenuCatalog) -> Result<(), RepositoryError> {
        let mut guard = self
            .catalog
            .write()
            .map_err(|e| RepositoryError::AccessError {
                message: e.to_string(),
            })?;
        *guard = catalog.clone();
        Ok(())
    }

    fn update<T, E, F>(&self, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut MenuCatalog) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        let mut guard = self
            .catalog
            .write()
            .map_err(|e| RepositoryError::AccessError {
                message: e.to_string(),
            })?;
        let mut draft = guard.clone();
        let value = apply(&mut draft)?;
        *guard = draft;
        Ok(value)
    }
}
