use proptest::prelude::*;

use suffrage_types::{Block, BlockDigest, Timestamp, Vote};

proptest! {
    /// Normalization is idempotent: folding twice equals folding once.
    #[test]
    fn vote_normalization_idempotent(
        voter in "\\PC{0,24}",
        candidate_id in "\\PC{0,24}",
        candidate_name in "\\PC{0,24}",
    ) {
        let once = Vote::new(voter, candidate_id, candidate_name).normalized();
        let twice = once.clone().normalized();
        prop_assert_eq!(once, twice);
    }

    /// Normalized ASCII votes contain no uppercase characters.
    #[test]
    fn vote_normalization_lowercases_ascii(
        voter in "[A-Za-z0-9 ]{1,24}",
        candidate_id in "[A-Za-z0-9]{1,12}",
        candidate_name in "[A-Za-z ]{1,24}",
    ) {
        let vote = Vote::new(voter, candidate_id, candidate_name).normalized();
        prop_assert!(!vote.voter_name.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert!(!vote.candidate_id.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert!(!vote.candidate_name.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// Vote JSON roundtrip preserves every field.
    #[test]
    fn vote_json_roundtrip(
        voter in "[a-z0-9 ]{0,24}",
        candidate_id in "[a-z0-9]{0,12}",
        candidate_name in "[a-z ]{0,24}",
    ) {
        let vote = Vote::new(voter, candidate_id, candidate_name);
        let encoded = serde_json::to_string(&vote).unwrap();
        let decoded: Vote = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, vote);
    }

    /// Block JSON roundtrip preserves digests, nonce, and votes.
    #[test]
    fn block_json_roundtrip(
        index in 1u64..1_000_000,
        nonce in any::<u64>(),
        nanos in any::<i64>(),
        hash in "[A-Za-z0-9_-]{43}",
        prev in "[A-Za-z0-9_-]{43}",
    ) {
        let block = Block {
            index,
            votes: vec![Vote::new("alice", "x1", "xavier")],
            timestamp: Timestamp::new(nanos),
            nonce,
            hash: BlockDigest::new(hash),
            previous_block_hash: BlockDigest::new(prev),
        };
        let encoded = serde_json::to_string(&block).unwrap();
        let decoded: Block = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, block);
    }

    /// BlockDigest serializes transparently as a bare JSON string.
    #[test]
    fn digest_serializes_transparent(raw in "[A-Za-z0-9_-]{1,43}") {
        let digest = BlockDigest::new(raw.clone());
        let encoded = serde_json::to_string(&digest).unwrap();
        prop_assert_eq!(encoded, format!("\"{}\"", raw));
    }

    /// Timestamp ordering follows the underlying nanosecond count.
    #[test]
    fn timestamp_ordering(a in any::<i64>(), b in any::<i64>()) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }
}
