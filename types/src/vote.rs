//! A single vote and its submission-time normalization.

use serde::{Deserialize, Serialize};

/// A vote linking a voter to a candidate.
///
/// The serde names (`voterName`, `candidateID`, `candidateName`) are the
/// canonical JSON form hashed into block payloads, so they must stay
/// stable between the miner and every independent validator.
///
/// Voter identity is an opaque string — there is no signature or
/// attestation attached to a vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub voter_name: String,
    #[serde(rename = "candidateID")]
    pub candidate_id: String,
    pub candidate_name: String,
}

impl Vote {
    pub fn new(
        voter_name: impl Into<String>,
        candidate_id: impl Into<String>,
        candidate_name: impl Into<String>,
    ) -> Self {
        Self {
            voter_name: voter_name.into(),
            candidate_id: candidate_id.into(),
            candidate_name: candidate_name.into(),
        }
    }

    /// Case-fold all three fields to lowercase.
    ///
    /// Applied exactly once, when the vote enters the pending pool.
    /// Committed votes are never re-normalized, and queries match
    /// case-sensitively against the stored (lowercase) form.
    pub fn normalized(self) -> Self {
        Self {
            voter_name: self.voter_name.to_lowercase(),
            candidate_id: self.candidate_id.to_lowercase(),
            candidate_name: self.candidate_name.to_lowercase(),
        }
    }
}
