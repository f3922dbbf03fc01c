//! Property-based tests for session tokens
//!
//! Uses proptest to generate random inputs and verify properties

use proptest::prelude::*;
use std::sync::OnceLock;

use micropost::auth::sessions::TokenKeys;

use crate::common::keys::test_token_keys;

/// Keys are parsed once; every case reuses them
fn shared_keys() -> &'static TokenKeys {
    static KEYS: OnceLock<TokenKeys> = OnceLock::new();
    KEYS.get_or_init(test_token_keys)
}

proptest! {
    #[test]
    fn test_token_roundtrip_preserves_user_id(user_id in any::<i64>()) {
        let keys = shared_keys();
        let token = keys.issue(user_id).unwrap();

        prop_assert_eq!(keys.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_random_strings_never_verify(token in "[A-Za-z0-9._-]{1,120}") {
        let keys = shared_keys();

        prop_assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_truncated_tokens_never_verify(user_id in any::<i64>(), cut in 1usize..40) {
        let keys = shared_keys();
        let token = keys.issue(user_id).unwrap();
        let truncated = &token[..token.len() - cut];

        prop_assert!(keys.verify(truncated).is_err());
    }
}
