//! Vote submission.
//!
//! [`VoteSubmitter::cast_vote`] resolves the voter, fetches their sequence
//! number, builds a memo-carrying transaction valid for the configured
//! window, has the wallet sign it, and submits it to Horizon. Every failure
//! is folded into a `failed` [`VoteResult`]; nothing escapes the call.
//!
//! Concurrent `cast_vote` calls for the same identity are not coordinated:
//! each fetches its own sequence number, so two in-flight votes can collide
//! and one will be rejected by the network.

use std::sync::Arc;

use chrono::Utc;
use livepoll_core::config::NetworkConfig;
use livepoll_core::types::{Identity, VoteResult, VoteSelection};
use livepoll_core::xdr::{self, Transaction, XdrError};
use livepoll_horizon::{HorizonError, LedgerNetwork};
use livepoll_wallet::{Wallet, WalletError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a vote could not be submitted.
#[derive(Debug, Error)]
pub enum VoteError {
    #[error("wallet not connected")]
    WalletNotConnected,
    #[error("wallet not connected: {0}")]
    WalletUnavailable(#[source] WalletError),
    #[error("failed to fetch account info: {0}")]
    AccountLookupFailed(#[source] HorizonError),
    #[error("failed to build transaction: {0}")]
    TransactionBuild(#[from] XdrError),
    #[error("failed to sign transaction: {0}")]
    SigningFailed(String),
    #[error("submission failed: {title}")]
    SubmissionRejected { title: String },
}

/// Result alias for vote submission steps.
pub type Result<T> = std::result::Result<T, VoteError>;

/// Memo text recorded on a vote transaction.
pub fn vote_memo(option: VoteSelection) -> String {
    format!("Vote for option {option}")
}

/// Casts votes on behalf of the wallet's account.
pub struct VoteSubmitter<W, N> {
    wallet: Arc<W>,
    network: Arc<N>,
    base_fee: u32,
    tx_timeout_secs: u64,
}

impl<W, N> std::fmt::Debug for VoteSubmitter<W, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoteSubmitter")
            .field("base_fee", &self.base_fee)
            .field("tx_timeout_secs", &self.tx_timeout_secs)
            .finish()
    }
}

impl<W: Wallet, N: LedgerNetwork> VoteSubmitter<W, N> {
    pub fn new(wallet: Arc<W>, network: Arc<N>, config: &NetworkConfig) -> Self {
        Self {
            wallet,
            network,
            base_fee: config.base_fee,
            tx_timeout_secs: config.tx_timeout_secs,
        }
    }

    /// Casts a vote for `option`. Always returns a result, never panics.
    pub async fn cast_vote(&self, option: impl Into<VoteSelection>) -> VoteResult {
        let option = option.into();
        match self.submit_vote(option).await {
            Ok(tx_hash) => {
                info!(%option, %tx_hash, "vote submitted");
                VoteResult::success(tx_hash)
            }
            Err(e) => {
                warn!(%option, error = %e, "vote failed");
                VoteResult::failed(e)
            }
        }
    }

    async fn submit_vote(&self, option: VoteSelection) -> Result<String> {
        let identity = self
            .wallet
            .public_key()
            .await
            .map_err(VoteError::WalletUnavailable)?
            .ok_or(VoteError::WalletNotConnected)?;

        let sequence = self
            .network
            .account_sequence(&identity)
            .await
            .map_err(VoteError::AccountLookupFailed)?;
        debug!(%identity, sequence, "account sequence fetched");

        let tx = self.build_transaction(&identity, sequence, option, unix_now())?;
        let unsigned = xdr::encode_unsigned(tx)?;

        let signed = self
            .wallet
            .sign_transaction(&unsigned)
            .await
            .map_err(|e| VoteError::SigningFailed(e.to_string()))?;
        if signed.is_empty() {
            return Err(VoteError::SigningFailed("wallet returned no signature".into()));
        }

        let response = self
            .network
            .submit_transaction(&signed)
            .await
            .map_err(|e| match e {
                HorizonError::Status { title, .. } => VoteError::SubmissionRejected { title },
                other => VoteError::SubmissionRejected {
                    title: other.to_string(),
                },
            })?;
        Ok(response.hash)
    }

    /// Builds the vote transaction for `source` at account sequence
    /// `sequence`, valid from `now` for the configured timeout.
    pub fn build_transaction(
        &self,
        source: &Identity,
        sequence: i64,
        option: VoteSelection,
        now: u64,
    ) -> Result<Transaction> {
        let next = sequence.checked_add(1).ok_or_else(|| {
            VoteError::AccountLookupFailed(HorizonError::InvalidSequence(sequence.to_string()))
        })?;
        let memo = xdr::text_memo(&vote_memo(option))?;
        let tx = xdr::transaction(
            source.as_str(),
            next,
            self.base_fee,
            Some(xdr::time_bounds(now, self.tx_timeout_secs)),
            memo,
        )?;
        Ok(tx)
    }
}

fn unix_now() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}
