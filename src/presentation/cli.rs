//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config, --store, --app-name) are
//! inherited by all subcommands and override the loaded configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// treemenu - hierarchical navigation menus
#[derive(Parser, Debug)]
#[command(name = "treemenu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to .treemenu/config.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Menu store file (.toml, .yaml or .json)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Path prefix used for item links
    #[arg(long, global = true)]
    pub app_name: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a menu for a request query string
    Render {
        /// Menu title
        menu: String,

        /// Raw query string of the request (e.g. "main=4&footer=2")
        #[arg(short, long, default_value = "")]
        query: String,

        /// Fail on an invalid or unknown selection instead of collapsing
        #[arg(long)]
        strict: bool,
    },

    /// Print the canonical link of the item with the given slug
    Resolve {
        /// Item slug
        slug: String,
    },

    /// Validate the menu store
    Check,

    /// List menus
    Menus,

    /// Manage menus
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },

    /// Manage menu items
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum MenuAction {
    /// Create a menu
    Add {
        /// Menu title (unique; also the query parameter name)
        title: String,

        /// Menu slug (defaults to the title, lowercased with `-` separators)
        #[arg(long)]
        slug: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ItemAction {
    /// Create a menu item
    Add {
        /// Title of the menu the item belongs to
        menu: String,

        /// Item title
        title: String,

        /// Unique item slug
        #[arg(long)]
        slug: String,

        /// Parent item id (must be in the same menu)
        #[arg(long)]
        parent: Option<u64>,
    },
}
