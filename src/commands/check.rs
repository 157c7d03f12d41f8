//! Check command handler
//!
//! Exits non-zero when the store has integrity issues.

use anyhow::Result;

use treemenu::presentation::factory;
use treemenu::presentation::output::{check_json, render_check_text};

use super::{print_json, CommandContext};

pub fn cmd_check(ctx: &CommandContext) -> Result<()> {
    let report = factory::create_check_use_case(&ctx.config).execute()?;

    if ctx.is_json() {
        print_json(&check_json(&report))?;
    } else {
        println!("{}", render_check_text(&report, ctx.unicode()));
    }

    if !report.is_ok() {
        std::process::exit(1);
    }
    Ok(())
}
