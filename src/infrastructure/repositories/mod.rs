//! Repository Implementations
//!
//! Concrete implementations of the `MenuRepository` port.

mod file_store;
mod memory;

pub use file_store::{FileMenuRepository, StoreFormat};
pub use memory::InMemoryMenuRepository;
