//! Common types shared across livepoll crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A wallet's public account identifier (a `G…` StrKey on Stellar).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wraps an account id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the account id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Index of a poll option.
///
/// Not range-checked here; the poll contract owns validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteSelection(pub i64);

impl fmt::Display for VoteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VoteSelection {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

/// Outcome status of a vote submission.
///
/// `Pending` is reserved for asynchronous confirmation tracking and is
/// never produced by the current submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteStatus {
    Pending,
    Success,
    Failed,
}

impl VoteStatus {
    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for VoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single vote submission. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResult {
    /// Network-assigned transaction hash; empty on failure.
    pub tx_hash: String,
    pub status: VoteStatus,
    /// Failure cause (present only when `status` is `failed`).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl VoteResult {
    /// A successful submission carrying the network's hash verbatim.
    pub fn success(tx_hash: impl Into<String>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            status: VoteStatus::Success,
            error: None,
        }
    }

    /// A failed submission with the stringified cause.
    pub fn failed(cause: impl fmt::Display) -> Self {
        Self {
            tx_hash: String::new(),
            status: VoteStatus::Failed,
            error: Some(cause.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == VoteStatus::Success
    }
}

/// Aggregate vote counts for a poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// Total votes cast across all options.
    pub total: u64,
    /// Per-option counts, indexed by option.
    pub counts: Vec<u64>,
}
