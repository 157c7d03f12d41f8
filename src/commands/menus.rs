//! Menus command handler

use anyhow::Result;

use treemenu::domain::ports::MenuRepository;
use treemenu::presentation::factory;
use treemenu::presentation::output::{menu_summaries, render_menus_text};

use super::{print_json, CommandContext};

pub fn cmd_menus(ctx: &CommandContext) -> Result<()> {
    let catalog = factory::create_repository(&ctx.config).load_catalog()?;
    let summaries = menu_summaries(&catalog);

    if ctx.is_json() {
        return print_json(&summaries);
    }

    println!("{}", render_menus_text(&summaries));
    Ok(())
}
