//! Scenario: Rendering a Shop Menu
//!
//! Journey: A visitor browses Home → Shop → Clothes → Shoes while a second
//! menu on the same page keeps its own selection.
//!
//! Success Criteria:
//! - The start page shows only top-level items
//! - The path to the current item is open, every other branch closed
//! - Unknown selections are reported, not silently rendered

use treemenu::application::DrawMenuUseCase;
use treemenu::infrastructure::InMemoryMenuRepository;
use treemenu::{
    ItemId, Menu, MenuCatalog, MenuItem, MenuItemNode, MenuTreeBuilder, QueryParams,
    TreeBuildError,
};

fn shop_items() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "main", "Home", "home"),
        MenuItem::new(2, "main", "Shop", "shop"),
        MenuItem::new(3, "main", "Clothes", "clothes").with_parent(2),
        MenuItem::new(4, "main", "Shoes", "shoes").with_parent(3),
    ]
}

fn titles(nodes: &[MenuItemNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.title.as_str()).collect()
}

/// SCENARIO: start page, nothing selected
#[test]
fn scenario_start_page_shows_collapsed_roots() {
    let items = shop_items();

    let tree = MenuTreeBuilder::new(&items).build(None).unwrap();

    assert_eq!(titles(&tree.roots), vec!["Home", "Shop"]);
    assert!(tree.roots.iter().all(|n| n.children.is_none()));
}

/// SCENARIO: deep page, the whole chain opens
#[test]
fn scenario_deep_selection_opens_chain() {
    let items = shop_items();

    let tree = MenuTreeBuilder::new(&items)
        .build(Some(ItemId::new(4)))
        .unwrap();

    assert!(tree.roots[0].children.is_none());
    let shop = &tree.roots[1];
    assert_eq!(titles(shop.children()), vec!["Clothes"]);
    assert_eq!(titles(shop.children()[0].children()), vec!["Shoes"]);
}

/// SCENARIO: selecting a section root shows its first level only
#[test]
fn scenario_root_selection_opens_one_level() {
    let items = shop_items();

    let tree = MenuTreeBuilder::new(&items)
        .build(Some(ItemId::new(2)))
        .unwrap();

    let shop = &tree.roots[1];
    assert!(shop.selected);
    assert_eq!(titles(shop.children()), vec!["Clothes"]);
    assert!(shop.children()[0].children.is_none());
}

/// SCENARIO: a stale link points at an item that no longer exists
#[test]
fn scenario_missing_selection_is_reported() {
    let items = shop_items();

    let err = MenuTreeBuilder::new(&items)
        .build(Some(ItemId::new(999)))
        .unwrap_err();

    assert_eq!(
        err,
        TreeBuildError::SelectedNotFound {
            id: ItemId::new(999)
        }
    );
}

/// SCENARIO: two menus on one page keep each other's state in their links
#[test]
fn scenario_two_menus_share_the_query_string() {
    let mut items = shop_items()
        .into_iter()
        .map(|i| {
            let url = format!("/menu/?&main={}", i.id());
            i.with_url(url)
        })
        .collect::<Vec<_>>();
    items.push(MenuItem::new(5, "footer", "Contacts", "contacts").with_url("/menu/?&footer=5"));
    let use_case = DrawMenuUseCase::new(InMemoryMenuRepository::new(MenuCatalog {
        menus: vec![Menu::new(1, "main", "main"), Menu::new(2, "footer", "footer")],
        items,
    }));
    let query = QueryParams::parse("?&main=3&footer=5");

    let main = use_case.execute("main", &query).unwrap();
    let footer = use_case.execute("footer", &query).unwrap();

    assert_eq!(main.href(&main.roots[0]), "/menu/?&main=1&footer=5");
    assert_eq!(footer.href(&footer.roots[0]), "/menu/?&footer=5&main=3");
    assert_eq!(footer.selected(), Some(ItemId::new(5)));
}

/// SCENARIO: another menu's item id cannot open this menu
#[test]
fn scenario_selection_from_other_menu_is_not_found() {
    let items = shop_items();
    let use_case = DrawMenuUseCase::new(InMemoryMenuRepository::new(MenuCatalog {
        menus: vec![Menu::new(1, "main", "main"), Menu::new(2, "footer", "footer")],
        items: items
            .into_iter()
            .chain([MenuItem::new(5, "footer", "Contacts", "contacts")])
            .collect(),
    }));

    let err = use_case
        .execute("main", &QueryParams::parse("main=5"))
        .unwrap_err();
    assert!(err.is_selection_error());

    let degraded = use_case
        .execute_or_degrade("main", &QueryParams::parse("main=5"))
        .unwrap();
    assert!(degraded.roots.iter().all(|n| n.children.is_none()));
}
