//! Redirect Use Case
//!
//! Resolves the slug link of an item (`/{app}/{slug}/`) to its canonical
//! link.

use crate::domain::ports::{MenuRepository, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum RedirectError {
    #[error("no menu item with slug '{slug}'")]
    NotFound { slug: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct RedirectUseCase<R: MenuRepository> {
    repository: R,
}

impl<R: MenuRepository> RedirectUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Canonical url of the item carrying `slug`
    pub fn resolve(&self, slug: &str) -> Result<String, RedirectError> {
        let item = self
            .repository
            .fetch_item_by_slug(slug)?
            .ok_or_else(|| RedirectError::NotFound {
                slug: slug.to_string(),
            })?;
        Ok(item.url().to_string())
    }
}
