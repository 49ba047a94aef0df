//! Property-based tests for request signing.

use proptest::prelude::*;

use super::signer::sign;

fn is_upper_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// MD5 signatures are always 32 uppercase hex characters.
    #[test]
    fn prop_md5_shape(canonical in ".{0,200}", key in ".{0,64}") {
        let mac = sign(&canonical, &key);
        prop_assert_eq!(mac.len(), 32);
        prop_assert!(is_upper_hex(&mac), "not uppercase hex: {}", mac);
    }

    /// Same input, same signature.
    #[test]
    fn prop_deterministic(canonical in ".{0,200}", key in ".{1,64}") {
        prop_assert_eq!(sign(&canonical, &key), sign(&canonical, &key));
    }

    /// Changing the canonical string changes the signature.
    #[test]
    fn prop_canonical_sensitive(
        a in "[A-Z]{1,10}=[0-9]{1,20}",
        b in "[A-Z]{1,10}=[0-9]{1,20}",
        key in "[0-9A-F]{16,48}",
    ) {
        prop_assume!(a != b);
        prop_assert_ne!(sign(&a, &key), sign(&b, &key));
    }

    /// Changing the key changes the signature.
    #[test]
    fn prop_key_sensitive(
        canonical in "[A-Z]{1,10}=[0-9]{1,20}",
        k1 in "[0-9A-F]{16,48}",
        k2 in "[0-9A-F]{16,48}",
    ) {
        prop_assume!(k1 != k2);
        prop_assert_ne!(sign(&canonical, &k1), sign(&canonical, &k2));
    }
}
