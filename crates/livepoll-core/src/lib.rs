//! # livepoll-core
//!
//! Core types, network constants, configuration, and the vote transaction
//! envelopes shared by the livepoll crates.

pub mod config;
pub mod types;
pub mod xdr;

pub use config::NetworkConfig;
pub use types::{Identity, VoteResult, VoteSelection, VoteStatus, VoteTally};
