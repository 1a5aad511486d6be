//! Property tests for destination validation and backup slot mapping.

use std::path::{Component, Path};

use proptest::prelude::*;

use sysdeploy::domain::value_objects::{BackupSlot, DestinationPath};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap(),
        1 => Just("..".to_string()),
        1 => Just(".".to_string()),
        1 => Just(String::new()),
    ]
}

fn absolute_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 0..=6)
        .prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an accepted destination's backup slot stays under the root.
    #[test]
    fn property_slot_never_escapes_root(path in absolute_path()) {
        let root = Path::new("/srv/repo/backups");
        if let Ok(dst) = DestinationPath::new(&path) {
            let slot = BackupSlot::for_destination(&dst, root);

            prop_assert!(slot.path().starts_with(root));
            prop_assert!(slot.path() != root);
            prop_assert!(slot
                .path()
                .components()
                .all(|c| !matches!(c, Component::ParentDir)));
        }
    }

    /// PROPERTY: destinations containing `..` are always rejected.
    #[test]
    fn property_traversal_rejected(
        head in "[a-z]{1,8}",
        tail in "[a-z]{1,8}",
    ) {
        let path = format!("/{}/../{}", head, tail);
        prop_assert!(DestinationPath::new(&path).is_err());
    }

    /// PROPERTY: relative destinations are always rejected.
    #[test]
    fn property_relative_rejected(path in "[A-Za-z0-9._-][A-Za-z0-9./_-]{0,32}") {
        prop_assert!(DestinationPath::new(&path).is_err());
    }

    /// PROPERTY: distinct destinations map to distinct slots.
    #[test]
    fn property_slots_are_injective(a in absolute_path(), b in absolute_path()) {
        let root = Path::new("backups");
        if let (Ok(da), Ok(db)) = (DestinationPath::new(&a), DestinationPath::new(&b)) {
            if da.as_path() != db.as_path() {
                prop_assert_ne!(
                    BackupSlot::for_destination(&da, root),
                    BackupSlot::for_destination(&db, root)
                );
            }
        }
    }
}
