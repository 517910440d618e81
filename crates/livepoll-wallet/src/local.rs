//! Local ed25519 wallet.
//!
//! Holds the secret key in memory and produces real Stellar signatures over
//! the transaction hash for its configured network.

use std::sync::Mutex;

use ed25519_dalek::{Signer as DalekSigner, SigningKey};
use livepoll_core::types::Identity;
use livepoll_core::xdr;
use stellar_strkey::ed25519::PublicKey;
use tracing::debug;

use crate::wallet::{Result, Wallet, WalletError, WalletKind};

/// A wallet backed by an in-memory ed25519 key.
pub struct LocalWallet {
    signing_key: SigningKey,
    identity: Identity,
    network_passphrase: String,
    selected: Mutex<Option<WalletKind>>,
}

impl std::fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalWallet")
            .field("identity", &self.identity)
            .field("network_passphrase", &self.network_passphrase)
            .finish()
    }
}

impl LocalWallet {
    /// Creates a wallet from a raw 32-byte ed25519 secret.
    pub fn from_bytes(secret: &[u8; 32], network_passphrase: impl Into<String>) -> Self {
        let signing_key = SigningKey::from_bytes(secret);
        let identity = Identity::new(PublicKey(signing_key.verifying_key().to_bytes()).to_string());
        Self {
            signing_key,
            identity,
            network_passphrase: network_passphrase.into(),
            selected: Mutex::new(None),
        }
    }

    /// Creates a wallet from a hex-encoded 32-byte secret.
    pub fn from_hex(secret_hex: &str, network_passphrase: impl Into<String>) -> Result<Self> {
        let bytes = hex::decode(secret_hex.trim().trim_start_matches("0x"))
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        let secret: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| WalletError::InvalidKey(format!("expected 32 bytes, got {}", bytes.len())))?;
        Ok(Self::from_bytes(&secret, network_passphrase))
    }

    /// Creates a wallet with a freshly generated key.
    pub fn generate(network_passphrase: impl Into<String>) -> Self {
        let signing_key = SigningKey::generate(&mut rand::rngs::OsRng);
        Self::from_bytes(&signing_key.to_bytes(), network_passphrase)
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    fn sign_envelope(&self, envelope_xdr: &str) -> Result<String> {
        let envelope = xdr::decode_envelope(envelope_xdr)?;
        let source = xdr::account_id(&envelope.tx.source_account);
        if source != self.identity.as_str() {
            return Err(WalletError::Rejected(format!(
                "transaction source {source} is not this wallet"
            )));
        }

        let hash = xdr::transaction_hash(&envelope.tx, &self.network_passphrase)?;
        let signature = self.signing_key.sign(&hash);
        let decorated = xdr::decorated_signature(&self.public_key_bytes(), signature.to_bytes())?;
        let signed = xdr::with_signature(envelope, decorated)?;

        debug!(identity = %self.identity, hash = %hex::encode(hash), "envelope signed");
        Ok(xdr::encode_envelope(signed)?)
    }
}

impl Wallet for LocalWallet {
    fn select_wallet(&self, kind: WalletKind) -> Result<()> {
        let mut selected = self
            .selected
            .lock()
            .map_err(|_| WalletError::Unavailable("wallet state poisoned".into()))?;
        *selected = Some(kind);
        Ok(())
    }

    async fn connect(&self) -> Result<Identity> {
        Ok(self.identity.clone())
    }

    async fn public_key(&self) -> Result<Option<Identity>> {
        Ok(Some(self.identity.clone()))
    }

    async fn sign_transaction(&self, envelope_xdr: &str) -> Result<String> {
        self.sign_envelope(envelope_xdr)
    }
}
