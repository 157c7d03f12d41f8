//! Menu entity - a named collection of items forming one navigation tree

use serde::Serialize;

/// A menu; `title` is unique and doubles as the query parameter name
/// carrying the selection for this menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub id: u64,
    pub title: String,
    pub slug: String,
}

impl Menu {
    pub fn new(id: u64, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            slug: slug.into(),
        }
    }
}
