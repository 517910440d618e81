//! # livepoll-wallet
//!
//! Wallet adapter: identity resolution and transaction signing behind a
//! single [`Wallet`] trait.
//!
//! ## Modules
//!
//! - [`wallet`] — the `Wallet` trait, wallet kinds, and errors
//! - [`mock`] — stub wallet producing random identities and signatures
//! - [`local`] — ed25519 wallet that really signs Stellar envelopes

pub mod local;
pub mod mock;
pub mod wallet;

pub use local::LocalWallet;
pub use mock::MockWallet;
pub use wallet::{connect_wallet, Wallet, WalletError, WalletKind};
