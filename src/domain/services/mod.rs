//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod integrity;
mod links;
mod querystring;
mod tree_builder;

pub use integrity::{check_catalog, IntegrityIssue};
pub use links::{with_passthrough, LinkBuilder};
pub use querystring::passthrough_query;
pub use tree_builder::{MenuItemNode, MenuTree, MenuTreeBuilder, TreeBuildError};
