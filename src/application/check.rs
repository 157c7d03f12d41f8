//! Check Use Case
//!
//! Loads the whole store and runs the integrity checks over it.

use crate::domain::ports::{MenuRepository, RepositoryError};
use crate::domain::services::{check_catalog, IntegrityIssue};

/// Outcome of a store check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub menu_count: usize,
    pub item_count: usize,
    pub issues: Vec<IntegrityIssue>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

pub struct CheckUseCase<R: MenuRepository> {
    repository: R,
}

impl<R: MenuRepository> CheckUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<CheckReport, RepositoryError> {
        let catalog = self.repository.load_catalog()?;
        let issues = check_catalog(&catalog);
        for issue in &issues {
            tracing::debug!(%issue, "integrity issue");
        }
        Ok(CheckReport {
            menu_count: catalog.menus.len(),
            item_count: catalog.items.len(),
            issues,
        })
    }
}
