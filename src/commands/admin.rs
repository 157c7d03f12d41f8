//! Menu and item creation handlers

use anyhow::Result;

use treemenu::application::{slugify, NewItem};
use treemenu::presentation::factory;
use treemenu::ItemId;

use super::{print_json, CommandContext};

pub fn cmd_menu_add(ctx: &CommandContext, title: &str, slug: Option<&str>) -> Result<()> {
    let slug = slug.map_or_else(|| slugify(title), str::to_string);
    let menu = factory::create_admin_use_case(&ctx.config).add_menu(title, &slug)?;

    if ctx.is_json() {
        return print_json(&menu);
    }

    println!(
        "Created menu '{}' (id {}) in {}",
        menu.title,
        menu.id,
        ctx.store_path().display()
    );
    Ok(())
}

pub fn cmd_item_add(
    ctx: &CommandContext,
    menu: &str,
    title: &str,
    slug: &str,
    parent: Option<u64>,
) -> Result<()> {
    let item = factory::create_admin_use_case(&ctx.config).add_item(NewItem {
        menu: menu.to_string(),
        title: title.to_string(),
        slug: slug.to_string(),
        parent: parent.map(ItemId::new),
    })?;

    if ctx.is_json() {
        return print_json(&item);
    }

    println!(
        "Created item '{}' (id {}) → {}",
        item.title(),
        item.id(),
        item.url()
    );
    Ok(())
}
