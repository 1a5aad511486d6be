//! Property tests for octal mode parsing.

use proptest::prelude::*;

use sysdeploy::domain::value_objects::FileMode;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every permission value survives formatting as octal text.
    #[test]
    fn property_octal_text_parses_to_same_bits(bits in 0u32..=0o7777) {
        let padded: FileMode = format!("{:04o}", bits).parse().unwrap();
        let bare: FileMode = format!("{:o}", bits).parse().unwrap();

        prop_assert_eq!(padded.bits(), bits);
        prop_assert_eq!(bare.bits(), bits);
        prop_assert_eq!(padded.to_string(), format!("{:04o}", bits));
    }

    /// PROPERTY: any string with a non-digit character is rejected.
    #[test]
    fn property_non_digits_rejected(
        prefix in "[0-7]{0,3}",
        bad in "[^0-9]",
        suffix in "[0-7]{0,3}",
    ) {
        let text = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(text.parse::<FileMode>().is_err());
    }

    /// PROPERTY: digits 8 and 9 are never octal.
    #[test]
    fn property_eight_and_nine_rejected(
        prefix in "[0-7]{0,2}",
        bad in "[89]",
        suffix in "[0-7]{0,1}",
    ) {
        let text = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(text.parse::<FileMode>().is_err());
    }

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,32}") {
        let _ = s.parse::<FileMode>();
    }
}
