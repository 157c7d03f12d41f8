//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Menu store implementations (file, in-memory)
//! - `logging` - tracing subscriber setup for the binary

pub mod logging;
pub mod repositories;

pub use repositories::{FileMenuRepository, InMemoryMenuRepository, StoreFormat};
