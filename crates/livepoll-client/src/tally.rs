//! Poll read model.
//!
//! [`TallyReader`] is the read contract UI code depends on. [`MockTally`]
//! fronts it with a liveness check against the contract RPC and serves fixed
//! counts until contract-state reads are wired in; any failure yields zeros.

use std::future::Future;
use std::sync::Arc;

use livepoll_core::types::VoteTally;
use livepoll_horizon::{HorizonError, LedgerNetwork};
use thiserror::Error;
use tracing::warn;

/// Total served by [`MockTally`] when the network is up.
pub const MOCK_TOTAL_VOTES: u64 = 247;

/// Per-option counts served by [`MockTally`] when the network is up.
pub const MOCK_VOTE_COUNTS: [u64; 3] = [111, 77, 59];

/// Per-option counts returned when the network is unreachable.
pub const DEFAULT_VOTE_COUNTS: [u64; 3] = [0, 0, 0];

/// Errors from reading poll state.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("network unavailable: {0}")]
    NetworkUnavailable(#[from] HorizonError),
}

/// Read access to a poll's vote counts. Reads never fail; an unreachable
/// backend reads as zero.
pub trait TallyReader: Send + Sync {
    fn total_votes(&self) -> impl Future<Output = u64> + Send;

    fn vote_counts(&self) -> impl Future<Output = Vec<u64>> + Send;

    /// Both reads combined.
    fn tally(&self) -> impl Future<Output = VoteTally> + Send {
        async move {
            VoteTally {
                total: self.total_votes().await,
                counts: self.vote_counts().await,
            }
        }
    }
}

/// Read model returning literal counts while the network is live.
pub struct MockTally<N> {
    network: Arc<N>,
}

impl<N: LedgerNetwork> MockTally<N> {
    pub fn new(network: Arc<N>) -> Self {
        Self { network }
    }

    async fn check_liveness(&self) -> Result<(), TallyError> {
        self.network.health().await?;
        Ok(())
    }
}

impl<N: LedgerNetwork> TallyReader for MockTally<N> {
    async fn total_votes(&self) -> u64 {
        match self.check_liveness().await {
            Ok(()) => MOCK_TOTAL_VOTES,
            Err(e) => {
                warn!(error = %e, "total votes unavailable");
                0
            }
        }
    }

    async fn vote_counts(&self) -> Vec<u64> {
        match self.check_liveness().await {
            Ok(()) => MOCK_VOTE_COUNTS.to_vec(),
            Err(e) => {
                warn!(error = %e, "vote counts unavailable");
                DEFAULT_VOTE_COUNTS.to_vec()
            }
        }
    }
}
