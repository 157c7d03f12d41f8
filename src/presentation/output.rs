//! Output Rendering
//!
//! Text and JSON views of command results. Text output is built as strings
//! so it can be tested without a terminal.

use serde::Serialize;

use crate::application::{CheckReport, MenuContext};
use crate::domain::entities::MenuCatalog;
use crate::domain::services::MenuItemNode;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    expanded: &'static str,
    collapsed: &'static str,
    selected: &'static str,
}

impl Icons {
    fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                check: "✓",
                cross: "✗",
                expanded: "▾",
                collapsed: "▸",
                selected: "●",
            }
        } else {
            Self {
                check: "[OK]",
                cross: "[FAIL]",
                expanded: "-",
                collapsed: "+",
                selected: "*",
            }
        }
    }
}

/// Render a menu as an indented tree, one item per line.
///
/// Expanded items are marked open, everything else closed; the selected
/// item is flagged. Each line ends with the link the item would point to.
pub fn render_menu_text(context: &MenuContext, unicode: bool) -> String {
    let icons = Icons::new(unicode);
    let mut lines = vec![context.menu.clone()];
    if context.roots.is_empty() {
        lines.push("  (empty)".to_string());
    }
    for node in &context.roots {
        push_node(&mut lines, context, node, 1, &icons);
    }
    lines.join("\n")
}

fn push_node(
    lines: &mut Vec<String>,
    context: &MenuContext,
    node: &MenuItemNode,
    depth: usize,
    icons: &Icons,
) {
    let icon = if node.is_expanded() {
        icons.expanded
    } else {
        icons.collapsed
    };
    let marker = if node.selected {
        format!(" {}", icons.selected)
    } else {
        String::new()
    };
    lines.push(format!(
        "{}{} {}{}  {}",
        "  ".repeat(depth),
        icon,
        node.title,
        marker,
        context.href(node)
    ));
    for child in node.children() {
        push_node(lines, context, child, depth + 1, icons);
    }
}

/// JSON view of a rendered menu
pub fn menu_json(context: &MenuContext) -> serde_json::Value {
    serde_json::json!({
        "menu": context.menu,
        "roots": context.roots,
        "other_querystring": context.other_querystring,
        "path": context.path,
        "selected": context.selected(),
    })
}

/// Render a store check report
pub fn render_check_text(report: &CheckReport, unicode: bool) -> String {
    let icons = Icons::new(unicode);
    let summary = format!("{} menus, {} items", report.menu_count, report.item_count);
    if report.is_ok() {
        return format!("{} Store OK ({})", icons.check, summary);
    }

    let mut lines = vec![format!(
        "{} {} issue(s) found ({})",
        icons.cross,
        report.issues.len(),
        summary
    )];
    lines.extend(report.issues.iter().map(|issue| format!("  - {issue}")));
    lines.join("\n")
}

pub fn check_json(report: &CheckReport) -> serde_json::Value {
    serde_json::json!({
        "ok": report.is_ok(),
        "menus": report.menu_count,
        "items": report.item_count,
        "issues": report.issues.iter().map(ToString::to_string).collect::<Vec<_>>(),
    })
}

/// Per-menu summary used by `menus`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSummary {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub items: usize,
}

pub fn menu_summaries(catalog: &MenuCatalog) -> Vec<MenuSummary> {
    catalog
        .menus
        .iter()
        .map(|m| MenuSummary {
            id: m.id,
            title: m.title.clone(),
            slug: m.slug.clone(),
            items: catalog.items_of(&m.title).count(),
        })
        .collect()
}

pub fn render_menus_text(summaries: &[MenuSummary]) -> String {
    if summaries.is_empty() {
        return "No menus defined".to_string();
    }
    summaries
        .iter()
        .map(|s| format!("{:>3}  {} ({} items)", s.id, s.title, s.items))
        .collect::<Vec<_>>()
        .join("\n")
}
