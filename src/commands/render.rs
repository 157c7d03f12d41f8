//! Render command handler

use anyhow::Result;

use treemenu::presentation::factory;
use treemenu::presentation::output::{menu_json, render_menu_text};
use treemenu::QueryParams;

use super::{print_json, CommandContext};

pub fn cmd_render(ctx: &CommandContext, menu: &str, query: &str, strict: bool) -> Result<()> {
    let query = QueryParams::parse(query);
    let use_case = factory::create_draw_menu_use_case(&ctx.config);

    let context = if strict || ctx.config.render.strict_selection {
        use_case.execute(menu, &query)?
    } else {
        use_case.execute_or_degrade(menu, &query)?
    };

    if ctx.is_json() {
        return print_json(&menu_json(&context));
    }

    println!("{}", render_menu_text(&context, ctx.unicode()));
    Ok(())
}
