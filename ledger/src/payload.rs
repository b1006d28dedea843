//! Canonical payload encoding shared by mining and re-validation.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Serialize;

use suffrage_types::Vote;

/// The hashed preimage of a block: an index rendered as a decimal string
/// plus the votes the block seals. Field order is fixed by declaration.
#[derive(Serialize)]
struct BlockPayload<'a> {
    index: String,
    votes: &'a [Vote],
}

/// Encode a block payload to its canonical text form.
///
/// JSON with fixed field order, then URL-safe unpadded base64 over the
/// JSON bytes. Mining and validation must produce identical text for
/// identical inputs — any divergence invalidates every chain.
pub fn encode_payload(index: u64, votes: &[Vote]) -> String {
    let payload = BlockPayload {
        index: index.to_string(),
        votes,
    };
    let json = serde_json::to_vec(&payload).expect("payload serialization is infallible");
    URL_SAFE_NO_PAD.encode(json)
}
