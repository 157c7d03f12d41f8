//! Resolve command handler
//!
//! Prints where the slug link of an item redirects to.

use anyhow::Result;

use treemenu::presentation::factory;

use super::{print_json, CommandContext};

pub fn cmd_resolve(ctx: &CommandContext, slug: &str) -> Result<()> {
    let url = factory::create_redirect_use_case(&ctx.config).resolve(slug)?;

    if ctx.is_json() {
        return print_json(&serde_json::json!({
            "slug": slug,
            "from": ctx.config.links().slug_url(slug),
            "url": url,
        }));
    }

    println!("{url}");
    Ok(())
}
