//! Ledger network adapter.
//!
//! Talks to a Horizon REST endpoint for account state and transaction
//! submission, and to a Soroban RPC endpoint for liveness.

use std::future::Future;
use std::time::Duration;

use livepoll_core::config::NetworkConfig;
use livepoll_core::types::Identity;
use reqwest::{Client, Response, Url};
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{AccountResponse, Problem, SubmitResponse};

/// Errors from ledger network operations.
#[derive(Debug, Error)]
pub enum HorizonError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{title} (status {status})")]
    Status { status: u16, title: String },
    #[error("invalid sequence number: {0}")]
    InvalidSequence(String),
    #[error("invalid horizon url: {0}")]
    InvalidUrl(String),
    #[error("invalid account id: {0:?}")]
    InvalidAccount(String),
}

/// Result alias for network operations.
pub type Result<T> = std::result::Result<T, HorizonError>;

/// Operations the vote flow needs from the ledger network.
pub trait LedgerNetwork: Send + Sync {
    /// Current sequence number of `account`.
    fn account_sequence(&self, account: &Identity) -> impl Future<Output = Result<i64>> + Send;

    /// Submits a signed base64 envelope, returning the network's response.
    fn submit_transaction(
        &self,
        signed_envelope: &str,
    ) -> impl Future<Output = Result<SubmitResponse>> + Send;

    /// Succeeds when the contract RPC service answers its health check.
    fn health(&self) -> impl Future<Output = Result<()>> + Send;
}

/// HTTP client for Horizon and Soroban RPC.
#[derive(Clone)]
pub struct HorizonAdapter {
    client: Client,
    horizon_url: String,
    accounts_url: Url,
    soroban_rpc_url: String,
}

impl std::fmt::Debug for HorizonAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HorizonAdapter")
            .field("horizon_url", &self.horizon_url)
            .field("soroban_rpc_url", &self.soroban_rpc_url)
            .finish()
    }
}

impl HorizonAdapter {
    /// Creates an adapter for the endpoints in `config`.
    pub fn new(config: &NetworkConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        let horizon_url = config.horizon_url.trim_end_matches('/').to_string();
        Ok(Self {
            client,
            accounts_url: accounts_url(&horizon_url)?,
            horizon_url,
            soroban_rpc_url: config.soroban_rpc_url.trim_end_matches('/').to_string(),
        })
    }

    /// `{horizon}/accounts/{account}`, with the account id escaped as a
    /// single path segment.
    pub fn account_url(&self, account: &Identity) -> Result<Url> {
        if matches!(account.as_str(), "" | "." | "..") {
            return Err(HorizonError::InvalidAccount(account.to_string()));
        }
        let mut url = self.accounts_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(account.as_str());
        }
        Ok(url)
    }

    pub fn horizon_url(&self) -> &str {
        &self.horizon_url
    }

    pub fn soroban_rpc_url(&self) -> &str {
        &self.soroban_rpc_url
    }
}

impl LedgerNetwork for HorizonAdapter {
    async fn account_sequence(&self, account: &Identity) -> Result<i64> {
        let url = self.account_url(account)?;
        debug!(%url, "fetching account");
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(status_error(resp, "Failed to fetch account info").await);
        }

        let body: AccountResponse = resp.json().await?;
        body.sequence
            .parse()
            .ok_or_else(|| HorizonError::InvalidSequence(format!("{:?}", body.sequence)))
    }

    async fn submit_transaction(&self, signed_envelope: &str) -> Result<SubmitResponse> {
        let url = format!("{}/transactions", self.horizon_url);
        debug!(%url, "submitting transaction");
        let resp = self
            .client
            .post(&url)
            .form(&[("tx", signed_envelope)])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(status_error(resp, "Transaction submission failed").await);
        }
        Ok(resp.json().await?)
    }

    async fn health(&self) -> Result<()> {
        let url = format!("{}/health", self.soroban_rpc_url);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            warn!(%url, status, "soroban rpc health check failed");
            return Err(HorizonError::Status {
                status,
                title: "Soroban RPC unavailable".into(),
            });
        }
        Ok(())
    }
}

fn accounts_url(horizon_url: &str) -> Result<Url> {
    let mut url =
        Url::parse(horizon_url).map_err(|e| HorizonError::InvalidUrl(format!("{horizon_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| HorizonError::InvalidUrl(horizon_url.to_string()))?
        .pop_if_empty()
        .push("accounts");
    Ok(url)
}

/// Turns a non-success response into `HorizonError::Status`, using the
/// problem document's title when the body has one.
async fn status_error(resp: Response, fallback: &str) -> HorizonError {
    let status = resp.status().as_u16();
    let title = match resp.json::<Problem>().await {
        Ok(problem) => problem.title,
        Err(_) => fallback.to_string(),
    };
    warn!(status, %title, "horizon request failed");
    HorizonError::Status { status, title }
}
