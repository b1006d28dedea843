//! Read-only vote aggregation over committed blocks.

use suffrage_types::Vote;

use crate::blockchain::Blockchain;

impl Blockchain {
    /// All committed votes for a candidate id, in chain order and then
    /// submission order within each block.
    ///
    /// Matching is exact: query keys must already be lowercase to meet
    /// the storage convention. The pending pool is never consulted —
    /// only chained votes count.
    pub fn votes_for_candidate(&self, candidate_id: &str) -> Vec<Vote> {
        self.committed_votes(|vote| vote.candidate_id == candidate_id)
    }

    /// All committed votes cast by a voter. Same ordering and matching
    /// rules as [`Blockchain::votes_for_candidate`].
    pub fn votes_for_voter(&self, voter_name: &str) -> Vec<Vote> {
        self.committed_votes(|vote| vote.voter_name == voter_name)
    }

    fn committed_votes(&self, matches: impl Fn(&Vote) -> bool) -> Vec<Vote> {
        self.chain
            .iter()
            .flat_map(|block| block.votes.iter())
            .filter(|vote| matches(vote))
            .cloned()
            .collect()
    }
}
