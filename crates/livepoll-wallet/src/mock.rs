//! Stub wallet for demos and tests.
//!
//! Hands out a random (but well-formed) account id and answers every
//! signing request with a random 64-hex-character payload instead of a
//! real signature.

use std::sync::Mutex;

use livepoll_core::types::Identity;
use rand::Rng;
use stellar_strkey::ed25519::PublicKey;
use tracing::debug;

use crate::wallet::{Result, Wallet, WalletError, WalletKind};

/// A wallet that never touches a key.
#[derive(Debug)]
pub struct MockWallet {
    identity: Mutex<Option<Identity>>,
    selected: Mutex<Option<WalletKind>>,
    reject_signing: bool,
    unavailable: bool,
}

impl Default for MockWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWallet {
    /// A wallet already connected to a random account.
    pub fn new() -> Self {
        Self::with_identity(random_identity())
    }

    /// A wallet connected to a fixed account.
    pub fn with_identity(identity: Identity) -> Self {
        Self {
            identity: Mutex::new(Some(identity)),
            selected: Mutex::new(None),
            reject_signing: false,
            unavailable: false,
        }
    }

    /// A wallet with no account until [`Wallet::connect`] is called.
    pub fn disconnected() -> Self {
        Self {
            identity: Mutex::new(None),
            selected: Mutex::new(None),
            reject_signing: false,
            unavailable: false,
        }
    }

    /// Makes every signing request fail as if the user declined it.
    pub fn rejecting_signatures(mut self) -> Self {
        self.reject_signing = true;
        self
    }

    /// Makes identity lookups fail as if the extension stopped responding.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// The wallet kind last passed to `select_wallet`.
    pub fn selected(&self) -> Option<WalletKind> {
        self.selected.lock().ok().and_then(|s| *s)
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(WalletError::Unavailable("extension not responding".into()));
        }
        Ok(())
    }
}

impl Wallet for MockWallet {
    fn select_wallet(&self, kind: WalletKind) -> Result<()> {
        let mut selected = self
            .selected
            .lock()
            .map_err(|_| WalletError::Unavailable("wallet state poisoned".into()))?;
        *selected = Some(kind);
        debug!(wallet = %kind, "wallet selected");
        Ok(())
    }

    async fn connect(&self) -> Result<Identity> {
        self.check_available()?;
        let mut identity = self
            .identity
            .lock()
            .map_err(|_| WalletError::Unavailable("wallet state poisoned".into()))?;
        Ok(identity.get_or_insert_with(random_identity).clone())
    }

    async fn public_key(&self) -> Result<Option<Identity>> {
        self.check_available()?;
        let identity = self
            .identity
            .lock()
            .map_err(|_| WalletError::Unavailable("wallet state poisoned".into()))?;
        Ok(identity.clone())
    }

    async fn sign_transaction(&self, envelope_xdr: &str) -> Result<String> {
        if self.reject_signing {
            return Err(WalletError::Rejected("user declined the request".into()));
        }
        if envelope_xdr.is_empty() {
            return Err(WalletError::Rejected("empty envelope".into()));
        }
        Ok(random_hex_hash())
    }
}

fn random_identity() -> Identity {
    let key: [u8; 32] = rand::thread_rng().gen();
    Identity::new(PublicKey(key).to_string())
}

fn random_hex_hash() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}
