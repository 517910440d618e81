//! Poll feedback events.
//!
//! Contract event decoding is not wired in yet; while the contract RPC is
//! live this serves a fixed set of feedback messages.

use livepoll_horizon::LedgerNetwork;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A feedback message emitted by the poll contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub value: String,
}

const MOCK_FEEDBACK: [&str; 3] = [
    "Great dApp experience!",
    "Smooth wallet integration",
    "Love the real-time updates",
];

/// Feedback events for `contract_id`; empty when the network is unreachable.
pub async fn fetch_feedback_events<N: LedgerNetwork>(
    network: &N,
    contract_id: &str,
) -> Vec<FeedbackEvent> {
    if let Err(e) = network.health().await {
        warn!(contract_id, error = %e, "feedback events unavailable");
        return Vec::new();
    }
    debug!(contract_id, "serving feedback events");
    MOCK_FEEDBACK
        .iter()
        .map(|v| FeedbackEvent {
            value: (*v).to_string(),
        })
        .collect()
}
