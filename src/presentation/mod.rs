//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text and JSON views

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, ItemAction, MenuAction};
pub use output::OutputFormat;
