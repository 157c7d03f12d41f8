//! treemenu CLI - hierarchical navigation menus
//!
//! Usage: treemenu <COMMAND>
//!
//! Commands:
//!   render   Render a menu for a request query string
//!   resolve  Print the canonical link of an item slug
//!   check    Validate the menu store
//!   menus    List menus
//!   menu     Manage menus
//!   item     Manage menu items

mod commands;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use treemenu::infrastructure::logging;
use treemenu::presentation::{Cli, Commands, ItemAction, MenuAction};

use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CommandContext::from_cli(&cli)?;

    logging::init(ctx.config.output.verbosity, std::io::stderr().is_terminal())?;

    match &cli.command {
        Commands::Render {
            menu,
            query,
            strict,
        } => commands::render::cmd_render(&ctx, menu, query, *strict),
        Commands::Resolve { slug } => commands::resolve::cmd_resolve(&ctx, slug),
        Commands::Check => commands::check::cmd_check(&ctx),
        Commands::Menus => commands::menus::cmd_menus(&ctx),
        Commands::Menu {
            action: MenuAction::Add { title, slug },
        } => commands::admin::cmd_menu_add(&ctx, title, slug.as_deref()),
        Commands::Item {
            action:
                ItemAction::Add {
                    menu,
                    title,
                    slug,
                    parent,
                },
        } => commands::admin::cmd_item_add(&ctx, menu, title, slug, *parent),
    }
}
