//! A single shard range and its JSON codec.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TesseraError};
use crate::types::{ShardIndex, CONTENT_PATH_MAX_LEN};

const DECODE_STAGE: &str = "Failed to decode shard range";

/// One partition of a root container's keyspace, as recorded by the
/// control plane.
///
/// A range owns the interval `(lower, upper]`: the lower bound is
/// exclusive, the upper bound inclusive, and an empty string denotes an
/// open (infinite) end.
///
/// Field declaration order is part of the wire format: encoding emits
/// the fields in this exact order (`index, lower, upper, cid`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardRange {
    /// Position of this range among its siblings.
    pub index: ShardIndex,
    /// Exclusive lower bound; empty means unbounded below.
    pub lower: String,
    /// Inclusive upper bound; empty means unbounded above.
    pub upper: String,
    /// Container that physically stores objects in this range.
    pub cid: String,
}

impl ShardRange {
    /// Decode a shard range from a JSON object.
    ///
    /// All four fields are mandatory. A missing or mistyped field is a
    /// [`TesseraError::Schema`] error; text that is not valid JSON is
    /// [`TesseraError::MalformedInput`].
    pub fn decode(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| TesseraError::decode(DECODE_STAGE, e))
    }

    /// Decode a shard range from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| TesseraError::decode(DECODE_STAGE, e))
    }

    /// Encode this range as a compact JSON object with the fixed field
    /// order `index, lower, upper, cid`.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("shard range serialization cannot fail")
    }

    /// Position of `path` relative to this range's bounds.
    pub fn locate(&self, path: &str) -> PathPosition {
        locate_path(&self.lower, &self.upper, path)
    }

    /// Check whether `path` falls within `(lower, upper]`.
    pub fn contains(&self, path: &str) -> bool {
        self.locate(path) == PathPosition::Within
    }
}

/// Where a path sits relative to a `(lower, upper]` interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPosition {
    /// The path sorts at or below the lower bound.
    Before,
    /// The path is inside the interval.
    Within,
    /// The path sorts above the upper bound.
    After,
}

/// Byte comparison limited to the first `CONTENT_PATH_MAX_LEN` bytes of
/// each side. Paths that agree up to that limit compare equal.
fn cmp_truncated(a: &str, b: &str) -> Ordering {
    let a = &a.as_bytes()[..a.len().min(CONTENT_PATH_MAX_LEN)];
    let b = &b.as_bytes()[..b.len().min(CONTENT_PATH_MAX_LEN)];
    a.cmp(b)
}

/// The bound predicate shared by the routing table and the shard
/// self-check: exclusive lower, inclusive upper, empty bound = open end.
pub(crate) fn locate_path(lower: &str, upper: &str, path: &str) -> PathPosition {
    if !lower.is_empty() && cmp_truncated(path, lower) != Ordering::Greater {
        return PathPosition::Before;
    }
    if !upper.is_empty() && cmp_truncated(path, upper) == Ordering::Greater {
        return PathPosition::After;
    }
    PathPosition::Within
}
