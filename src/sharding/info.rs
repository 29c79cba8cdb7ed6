//! Per-shard descriptor and the self-defense bound check.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TesseraError};
use crate::sharding::range::{locate_path, PathPosition};
use crate::types::Timestamp;

const DECODE_STAGE: &str = "Failed to decode shard info";

/// A shard container's own view of the interval it owns.
///
/// Decoded once when the shard is attached and consulted on every
/// incoming request: a stale routing cache upstream may still send
/// paths this shard does not own, and [`ShardInfo::check_range`] is the
/// shard's defense against serving them.
///
/// Field declaration order is part of the wire format
/// (`root_cid, timestamp, lower, upper`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardInfo {
    /// The original, pre-split container this shard descends from.
    pub root_cid: String,
    /// Generation marker of the split that produced this shard.
    pub timestamp: Timestamp,
    /// Exclusive lower bound; empty means unbounded below.
    pub lower: String,
    /// Inclusive upper bound; empty means unbounded above.
    pub upper: String,
}

impl ShardInfo {
    /// Decode a shard descriptor from a JSON object. All four fields
    /// are mandatory.
    pub fn decode(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| TesseraError::decode(DECODE_STAGE, e))
    }

    /// Decode from an already-parsed JSON value, for callers that
    /// received the descriptor embedded in a larger envelope.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| TesseraError::decode(DECODE_STAGE, e))
    }

    /// Encode this descriptor as a compact JSON object with the fixed
    /// field order `root_cid, timestamp, lower, upper`.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("shard info serialization cannot fail")
    }

    /// Reject paths outside this shard's bounds.
    ///
    /// Succeeds iff `lower < path <= upper` under the same truncated
    /// comparison the routing table uses, so both sides of a boundary
    /// always agree. An [`TesseraError::OutOfRange`] error is the
    /// expected answer for a misrouted request, not a defect.
    pub fn check_range(&self, path: &str) -> Result<()> {
        if locate_path(&self.lower, &self.upper, path) != PathPosition::Within {
            return Err(TesseraError::OutOfRange);
        }
        Ok(())
    }
}
