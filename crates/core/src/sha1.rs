//! SHA1 record keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A SHA1 key identifying a tree URL record.
///
/// The key is 40 hexadecimal characters in either case. It is kept exactly as
/// the client sent it; the service never computes digests itself.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sha1Key(String);

impl Sha1Key {
    /// Length of a hex-encoded SHA1 digest.
    pub const LEN: usize = 40;

    /// Create from a string, validating format.
    pub fn new(key: impl Into<String>) -> crate::Result<Self> {
        let key = key.into();
        if !Self::is_valid(&key) {
            return Err(crate::Error::InvalidSha1(key));
        }
        Ok(Self(key))
    }

    /// Check whether `s` is a well-formed SHA1 key.
    pub fn is_valid(s: &str) -> bool {
        s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Get the key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Sha1Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha1Key({self})")
    }
}

impl fmt::Display for Sha1Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Sha1Key {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Sha1Key {
    type Error = crate::Error;

    fn try_from(s: String) -> crate::Result<Self> {
        Self::new(s)
    }
}

impl From<Sha1Key> for String {
    fn from(key: Sha1Key) -> Self {
        key.0
    }
}

impl AsRef<str> for Sha1Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
