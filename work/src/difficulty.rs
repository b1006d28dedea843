//! Difficulty predicate over block digests.

use suffrage_types::BlockDigest;

/// The digest prefix a block must carry to be accepted.
///
/// The standard target is four leading `'0'` characters. Shorter
/// prefixes exist for tests and low-difficulty dev networks; every
/// production path goes through [`Difficulty::standard`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Difficulty {
    prefix: String,
}

impl Difficulty {
    /// The standard difficulty target.
    pub const STANDARD_PREFIX: &'static str = "0000";

    pub fn standard() -> Self {
        Self {
            prefix: Self::STANDARD_PREFIX.to_string(),
        }
    }

    /// Construct with a custom prefix (tests, dev networks).
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether a digest meets this difficulty.
    pub fn is_met_by(&self, digest: &BlockDigest) -> bool {
        digest.as_str().starts_with(&self.prefix)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::standard()
    }
}
