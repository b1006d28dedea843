//! Textual block digest.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A block digest — the URL-safe base64 rendering of a SHA-256 hash,
/// or the `"0"` sentinel carried by the genesis block.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockDigest(String);

impl BlockDigest {
    pub fn new(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// The sentinel value the genesis block carries in both digest fields.
    pub fn sentinel() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_sentinel(&self) -> bool {
        self.0 == "0"
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for BlockDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() <= 8 {
            write!(f, "BlockDigest({})", self.0)
        } else {
            write!(f, "BlockDigest({}\u{2026})", &self.0[..8])
        }
    }
}

impl fmt::Display for BlockDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for BlockDigest {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BlockDigest {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
