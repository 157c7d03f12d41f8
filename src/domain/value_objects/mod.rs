//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod item_id;
mod query;

pub use item_id::ItemId;
pub use query::QueryParams;
