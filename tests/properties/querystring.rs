//! Property tests for query-string pass-through.

use proptest::prelude::*;

use treemenu::{passthrough_query, QueryParams};

/// Distinct keys with `&`/`=`-free values
fn params() -> impl Strategy<Value = Vec<(String, String)>> {
    let key = proptest::string::string_regex("[a-z][a-z0-9_]{0,5}").unwrap();
    let value = proptest::string::string_regex("[A-Za-z0-9%./_-]{0,8}").unwrap();
    proptest::collection::vec((key, value), 0..=8).prop_map(|pairs| {
        let mut seen = std::collections::HashSet::new();
        pairs
            .into_iter()
            .filter(|(k, _)| seen.insert(k.clone()))
            .collect()
    })
}

fn raw_query(pairs: &[(String, String)]) -> String {
    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("?&{joined}")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: pass-through keeps every other parameter, in order.
    #[test]
    fn property_passthrough_keeps_other_parameters(
        pairs in params(),
        pick in any::<prop::sample::Index>(),
    ) {
        // Either an existing key or one that never occurs
        let this_menu = if pairs.is_empty() {
            "main".to_string()
        } else {
            pairs[pick.index(pairs.len())].0.clone()
        };

        let out = passthrough_query(&QueryParams::parse(&raw_query(&pairs)), &this_menu);

        let rebuilt: Vec<(String, String)> = out
            .split('&')
            .filter(|s| !s.is_empty())
            .map(|s| {
                let (k, v) = s.split_once('=').unwrap();
                (k.to_string(), v.to_string())
            })
            .collect();
        let expected: Vec<(String, String)> = pairs
            .into_iter()
            .filter(|(k, _)| *k != this_menu)
            .collect();

        prop_assert_eq!(rebuilt, expected);
    }

    /// PROPERTY: the rendered menu's key never leaks into its own links.
    #[test]
    fn property_passthrough_drops_this_menu(pairs in params(), id in 1u64..10_000) {
        let mut query = QueryParams::parse(&raw_query(&pairs));
        query.insert("main", id.to_string());

        let out = passthrough_query(&query, "main");
        prop_assert!(out.split('&').all(|segment| !segment.starts_with("main=")));
    }
}
