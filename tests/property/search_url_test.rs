//! Property-based tests for the URL builder.
//!
//! For well-formed templates and non-empty terms, the `request` parameter of
//! the result decodes to the term and every other pair is unchanged; for
//! malformed templates the builder always fails.

use opac_search::services::url_builder::build_search_url;
use opac_search::types::errors::SearchError;
use proptest::prelude::*;
use url::Url;

fn arb_template() -> impl Strategy<Value = (String, Vec<(String, String)>)> {
    (
        prop_oneof![Just("http"), Just("https")],
        "[a-z][a-z0-9]{2,12}\\.(edu|org|cn)",
        proptest::option::of(1024u16..65535),
        "(/[A-Za-z0-9-]{1,12}){0,3}",
        proptest::collection::vec(("[a-z_]{1,10}", "[A-Za-z0-9 %+&=-]{0,10}"), 0..5),
        "[A-Za-z0-9 ]{0,8}",
        0usize..5,
    )
        .prop_map(|(scheme, host, port, path, extras, old, pos)| {
            let extras: Vec<(String, String)> = extras
                .into_iter()
                .filter(|(k, _)| k != "request")
                .collect();
            let mut all = extras.clone();
            let pos = pos.min(all.len());
            all.insert(pos, ("request".to_string(), old));

            let mut url = Url::parse(&format!("{}://{}", scheme, host)).unwrap();
            url.set_port(port).unwrap();
            url.set_path(&path);
            url.query_pairs_mut().extend_pairs(all);
            (url.to_string(), extras)
        })
}

fn arb_term() -> impl Strategy<Value = String> {
    prop_oneof![
        "[^\\x00-\\x1f]{1,20}",
        Just("十分钟冥想".to_string()),
        Just("C++ & Rust: 100% safe?".to_string()),
    ]
    .prop_filter("non-empty after trim", |t| !t.trim().is_empty())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn request_decodes_to_term_and_others_unchanged(
        (template, extras) in arb_template(),
        term in arb_term(),
    ) {
        let built = build_search_url(&template, &term).unwrap();
        let parsed = Url::parse(&built).unwrap();
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let requests: Vec<&String> = pairs.iter().filter(|(k, _)| k == "request").map(|(_, v)| v).collect();
        prop_assert_eq!(requests, vec![&term]);

        let others: Vec<(String, String)> = pairs.into_iter().filter(|(k, _)| k != "request").collect();
        prop_assert_eq!(others, extras);

        let original = Url::parse(&template).unwrap();
        prop_assert_eq!(parsed.host_str(), original.host_str());
        prop_assert_eq!(parsed.path(), original.path());
        prop_assert_eq!(parsed.port(), original.port());
    }

    #[test]
    fn malformed_templates_always_fail(
        garbage in "[a-z ]{0,20}",
        term in arb_term(),
    ) {
        // No scheme separator, so these never parse as absolute URLs.
        let result = build_search_url(&garbage, &term);
        let is_malformed = matches!(result, Err(SearchError::MalformedTemplate { .. }));
        prop_assert!(is_malformed);
    }
}
