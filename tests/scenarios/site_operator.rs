//! Scenario: Site Operator Builds Navigation
//!
//! Journey: An operator starts with no store, creates a menu and nested
//! items from the CLI, checks the store, and previews renders.
//!
//! Steps:
//! 1. `menu add` creates the store on first use
//! 2. `item add` nests items and derives their links
//! 3. `check` reports a sound store
//! 4. `render` and `resolve` show what visitors get
//!
//! Success Criteria:
//! - No hand-editing of the store is needed
//! - Every printed link works as a `--query` for the next render

use crate::common::*;

/// SCENARIO: from an empty directory to a rendered three-level menu
#[test]
fn scenario_operator_builds_and_previews_menu() {
    let env = TestEnv::new();

    // Steps 1-2: build the menu
    let steps: [&[&str]; 5] = [
        &["menu", "add", "Docs", "--slug", "docs"],
        &["item", "add", "Docs", "Guide", "--slug", "guide"],
        &["item", "add", "Docs", "Install", "--slug", "install", "--parent", "1"],
        &["item", "add", "Docs", "Linux", "--slug", "linux", "--parent", "2"],
        &["item", "add", "Docs", "Reference", "--slug", "reference"],
    ];
    for args in steps {
        let result = env.run(args);
        assert!(result.success, "{:?} failed: {}", args, result.stderr);
    }

    // Step 3: the store is sound
    let check = env.run(&["check"]);
    assert!(check.success, "check failed: {}", check.stdout);

    // Step 4: resolve a slug, then feed the link back as the query
    let resolved = env.run(&["resolve", "linux"]);
    assert!(resolved.success, "resolve failed: {}", resolved.stderr);
    let link = resolved.stdout.trim().to_string();
    assert_eq!(link, "/menu/?&Docs=3");

    let query = link.split_once('?').map(|(_, q)| q).unwrap_or("");
    let render = env.run(&["--json", "render", "Docs", "--query", query]);
    assert!(render.success, "render failed: {}", render.stderr);

    let json = render.json();
    assert_eq!(json["path"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["roots"][0]["children"][0]["children"][0]["title"], "Linux");
    assert!(json["roots"][1].get("children").is_none());
}

/// SCENARIO: a typo in the parent id never reaches the store
#[test]
fn scenario_operator_typo_is_rejected() {
    let env = TestEnv::with_store(SHOP_STORE);
    let before = env.read("menus.toml");

    let result = env.run(&["item", "add", "main", "Hats", "--slug", "hats", "--parent", "42"]);

    assert!(!result.success);
    assert!(result.stderr.contains("parent item 42 does not exist"));
    assert_eq!(env.read("menus.toml"), before);
}
