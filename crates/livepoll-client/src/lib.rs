//! # livepoll-client
//!
//! Vote submission and poll read models on top of a [`Wallet`] and a
//! [`LedgerNetwork`], both injected by the caller.
//!
//! ## Modules
//!
//! - [`submitter`] — builds, signs and submits vote transactions
//! - [`tally`] — vote totals and per-option counts
//! - [`events`] — poll feedback events
//!
//! [`Wallet`]: livepoll_wallet::Wallet
//! [`LedgerNetwork`]: livepoll_horizon::LedgerNetwork

pub mod events;
pub mod submitter;
pub mod tally;

pub use events::{fetch_feedback_events, FeedbackEvent};
pub use submitter::{VoteError, VoteSubmitter};
pub use tally::{MockTally, TallyError, TallyReader};
