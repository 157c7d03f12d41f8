//! Link derivation
//!
//! Canonical item links select the item through the query parameter named
//! after its menu: `/{app}/?&{menu}={id}`. Slug links (`/{app}/{slug}/`)
//! redirect to the canonical link.

use crate::domain::value_objects::ItemId;

/// Builds links under one application prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    app_name: String,
}

impl LinkBuilder {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Index page of the application
    pub fn index(&self) -> String {
        format!("/{}/", self.app_name)
    }

    /// Canonical link selecting `id` in `menu_title`
    pub fn item_url(&self, menu_title: &str, id: ItemId) -> String {
        format!("/{}/?&{}={}", self.app_name, menu_title, id)
    }

    /// Slug link that redirects to the canonical one
    pub fn slug_url(&self, slug: &str) -> String {
        format!("/{}/{}/", self.app_name, slug)
    }
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self::new("menu")
    }
}

/// Append the pass-through query to a canonical link.
pub fn with_passthrough(url: &str, other_querystring: &str) -> String {
    if other_querystring.is_empty() {
        url.to_string()
    } else {
        format!("{url}&{other_querystring}")
    }
}
