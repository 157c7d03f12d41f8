//! Query-string pass-through
//!
//! Links rendered for one menu must keep the selection state of every other
//! menu on the page. This service rebuilds the current query string minus
//! the parameter owned by the menu being rendered.

use crate::domain::value_objects::QueryParams;

/// `&`-joined `key=value` pairs of `params`, without `this_menu_key`.
///
/// Order is preserved and values are passed through without escaping.
pub fn passthrough_query(params: &QueryParams, this_menu_key: &str) -> String {
    params
        .iter()
        .filter(|(key, _)| *key != this_menu_key)
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
