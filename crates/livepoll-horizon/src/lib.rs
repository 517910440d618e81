//! # livepoll-horizon
//!
//! Network boundary to the Stellar ledger — account sequence lookup and
//! transaction submission against Horizon, liveness checks against Soroban RPC.
//!
//! ## Modules
//!
//! - [`adapter`] — the `LedgerNetwork` trait and its HTTP implementation
//! - [`types`] — Horizon response bodies

pub mod adapter;
pub mod types;

pub use adapter::{HorizonAdapter, HorizonError, LedgerNetwork};
pub use types::SubmitResponse;
