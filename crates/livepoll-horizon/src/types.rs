//! Horizon response bodies.

use serde::{Deserialize, Serialize};

/// The fields of `GET /accounts/{id}` that livepoll reads.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountResponse {
    pub sequence: SequenceNumber,
}

/// Horizon renders sequence numbers as strings; some proxies send numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SequenceNumber {
    Text(String),
    Number(i64),
}

impl SequenceNumber {
    pub fn parse(&self) -> Option<i64> {
        match self {
            Self::Text(s) => s.trim().parse().ok(),
            Self::Number(n) => Some(*n),
        }
    }
}

/// Body of a successful `POST /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Hex transaction hash assigned by the network.
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successful: Option<bool>,
}

/// RFC 7807 problem document returned by Horizon on errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}
