//! Wallet interface.
//!
//! A wallet is created once by the caller and shared (via `Arc`) with every
//! component that needs an identity or a signature.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use livepoll_core::types::Identity;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors from wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("signing rejected: {0}")]
    Rejected(String),
    #[error("wallet unavailable: {0}")]
    Unavailable(String),
    #[error("invalid private key: {0}")]
    InvalidKey(String),
    #[error("invalid transaction envelope: {0}")]
    InvalidEnvelope(#[from] livepoll_core::xdr::XdrError),
    #[error("unknown wallet kind: {0}")]
    UnknownKind(String),
}

/// Result alias for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Browser wallet extensions a user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Freighter,
    Albedo,
    Xbull,
    Lobstr,
    Rabet,
    Hana,
}

impl WalletKind {
    pub const ALL: [WalletKind; 6] = [
        Self::Freighter,
        Self::Albedo,
        Self::Xbull,
        Self::Lobstr,
        Self::Rabet,
        Self::Hana,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Freighter => "freighter",
            Self::Albedo => "albedo",
            Self::Xbull => "xbull",
            Self::Lobstr => "lobstr",
            Self::Rabet => "rabet",
            Self::Hana => "hana",
        }
    }
}

impl fmt::Display for WalletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletKind {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == lower)
            .ok_or_else(|| WalletError::UnknownKind(s.to_string()))
    }
}

/// Identity and signing capabilities of a connected wallet.
pub trait Wallet: Send + Sync {
    /// Chooses which wallet extension subsequent calls go to.
    fn select_wallet(&self, kind: WalletKind) -> Result<()>;

    /// Asks the user to approve a connection and returns their identity.
    fn connect(&self) -> impl Future<Output = Result<Identity>> + Send;

    /// Identity of the connected account, or `None` when not connected.
    fn public_key(&self) -> impl Future<Output = Result<Option<Identity>>> + Send;

    /// Signs a base64 XDR envelope and returns the signed envelope.
    ///
    /// The input is never modified; a rejected or failed signature is an
    /// error, never an empty string.
    fn sign_transaction(&self, envelope_xdr: &str)
        -> impl Future<Output = Result<String>> + Send;
}

/// Selects `kind` and connects, returning the user's identity.
pub async fn connect_wallet<W: Wallet>(wallet: &W, kind: WalletKind) -> Result<Identity> {
    wallet.select_wallet(kind)?;
    let identity = wallet.connect().await?;
    info!(wallet = %kind, identity = %identity, "wallet connected");
    Ok(identity)
}
