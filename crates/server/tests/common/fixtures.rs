//! Test fixtures.

use treeurls_core::Sha1Key;

/// A well-formed SHA1 key.
#[allow(dead_code)]
pub const TEST_SHA1: &str = "60e3da2efd886074e28e44d48cc642f84c25b140";

/// A conventional tree URL payload.
#[allow(dead_code)]
pub const TEST_TREE_URLS: &str = r#"[{"label":"tree_0","url":"http://example.org/x"}]"#;

/// Parse `TEST_SHA1`.
#[allow(dead_code)]
pub fn test_key() -> Sha1Key {
    Sha1Key::new(TEST_SHA1).expect("fixture sha1 is valid")
}

/// A distinct valid key derived from `n`.
#[allow(dead_code)]
pub fn numbered_sha1(n: u32) -> String {
    format!("{n:040x}")
}
