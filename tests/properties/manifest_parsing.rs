//! Property tests for the manifest parser.

use std::path::Path;

use proptest::prelude::*;

use sysdeploy::parse_manifest;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,512}") {
        let _ = parse_manifest(&s, Path::new("/nonexistent/deploy"), Path::new("/nonexistent"));
    }

    /// PROPERTY: an item missing any required key is rejected with that key named.
    #[test]
    fn property_missing_key_is_named(skip in 0usize..5) {
        let keys = ["src", "dst", "mode", "owner", "group"];
        let values = ["a.conf", "/etc/a.conf", "\"0644\"", "root", "root"];
        let mut item = String::new();
        for (i, (k, v)) in keys.iter().zip(values.iter()).enumerate() {
            if i != skip {
                let lead = if item.is_empty() { "  - " } else { "    " };
                item.push_str(&format!("{}{}: {}\n", lead, k, v));
            }
        }
        let doc = format!("files:\n{}", item);

        let err = parse_manifest(&doc, Path::new("/nonexistent/deploy"), Path::new("/nonexistent"))
            .unwrap_err();
        prop_assert_eq!(
            err.to_string(),
            format!("entry #1 missing key: {}", keys[skip])
        );
    }
}
