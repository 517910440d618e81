//! # livepoll
//!
//! Wallet-signed poll voting on the Stellar network.
//!
//! This crate re-exports the workspace libraries:
//!
//! - [`core`] — shared types, network config, vote transaction envelopes
//! - [`wallet`] — wallet adapter and implementations
//! - [`horizon`] — ledger network boundary
//! - [`client`] — vote submission and poll read models

pub use livepoll_client as client;
pub use livepoll_core as core;
pub use livepoll_horizon as horizon;
pub use livepoll_wallet as wallet;

/// Returns the library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
