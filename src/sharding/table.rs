//! Ordered table of shard ranges with point lookup by object path.
//!
//! The table is built once from the control plane's JSON description of
//! a partitioning and consulted read-only until the next refresh; the
//! caller swaps a stale table for a fresh one atomically. Lookup is a
//! binary search over the ranges, which construction keeps sorted by
//! `index` and verifies to be sorted by bound value as well.

use std::cmp::Ordering;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, TesseraError};
use crate::sharding::naming::is_container_id;
use crate::sharding::range::{PathPosition, ShardRange};

const DECODE_STAGE: &str = "Failed to decode shard ranges";

/// Routing table for a sharded container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShardRangeTable {
    // Sorted by `index`; bound order verified to match at construction.
    ranges: Vec<ShardRange>,
}

impl ShardRangeTable {
    /// Decode a table from a JSON array of shard range objects.
    ///
    /// Any element failure aborts the whole decode; a partially built
    /// table is never returned.
    pub fn decode(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| TesseraError::decode(DECODE_STAGE, e))?;
        let Value::Array(items) = value else {
            return Err(TesseraError::Schema(format!(
                "{DECODE_STAGE}: expected a JSON array"
            )));
        };
        let mut ranges = Vec::with_capacity(items.len());
        for item in items {
            ranges.push(ShardRange::from_value(item)?);
        }
        Self::from_ranges(ranges).map_err(|e| e.prefixed(DECODE_STAGE))
    }

    /// Build a table from decoded ranges.
    ///
    /// Sorts by `index` and verifies the invariants lookup depends on:
    /// indices are unique, every closed range has `lower < upper`, an
    /// open lower bound appears only on the first range, an open upper
    /// bound only on the last, and bounds do not overlap. Gaps between
    /// consecutive ranges are accepted; a path falling in a gap simply
    /// has no owner.
    pub fn from_ranges(mut ranges: Vec<ShardRange>) -> Result<Self> {
        ranges.sort_by_key(|r| r.index);
        for range in &ranges {
            // An inverted range matches no path and breaks the
            // bound-order precondition lookup relies on.
            if !range.lower.is_empty() && !range.upper.is_empty() && range.upper <= range.lower {
                return Err(TesseraError::Schema(format!(
                    "shard {} upper bound must be greater than its lower bound",
                    range.index
                )));
            }
        }
        for pair in ranges.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.index == next.index {
                return Err(TesseraError::Schema(format!(
                    "duplicate shard index {}",
                    prev.index
                )));
            }
            if prev.upper.is_empty() {
                return Err(TesseraError::Schema(format!(
                    "shard {} has an open upper bound but is not last",
                    prev.index
                )));
            }
            if next.lower.is_empty() {
                return Err(TesseraError::Schema(format!(
                    "shard {} has an open lower bound but is not first",
                    next.index
                )));
            }
            if prev.upper > next.lower {
                return Err(TesseraError::Schema(format!(
                    "shards {} and {} overlap",
                    prev.index, next.index
                )));
            }
        }
        debug!(ranges = ranges.len(), "shard range table built");
        Ok(Self { ranges })
    }

    /// Encode the table as a JSON array in ascending `index` order.
    /// An empty table encodes to `[]`.
    pub fn encode(&self) -> String {
        serde_json::to_string(&self.ranges).expect("shard range serialization cannot fail")
    }

    /// Find the range that covers `path`, if any.
    ///
    /// Returns `None` on an empty table or when the path falls in a gap
    /// of a partial partitioning.
    pub fn lookup(&self, path: &str) -> Option<&ShardRange> {
        if self.ranges.is_empty() {
            return None;
        }
        match self.ranges.binary_search_by(|r| match r.locate(path) {
            // The path sorts below this range, so the range is above
            // the target.
            PathPosition::Before => Ordering::Greater,
            PathPosition::Within => Ordering::Equal,
            PathPosition::After => Ordering::Less,
        }) {
            Ok(i) => Some(&self.ranges[i]),
            Err(_) => {
                warn!(path, "no shard range covers path");
                None
            }
        }
    }

    /// Verify that this table describes a complete partitioning, as
    /// required before a split may replace a root container's listing:
    /// at least two ranges, indices contiguous from 0, open outer
    /// bounds, exact tiling, and well-formed container ids.
    pub fn check_complete(&self) -> Result<()> {
        if self.ranges.len() < 2 {
            return Err(TesseraError::Schema(
                "a complete partitioning needs at least 2 shard ranges".into(),
            ));
        }
        let mut previous_upper = "";
        for (i, range) in self.ranges.iter().enumerate() {
            if range.index as usize != i {
                return Err(TesseraError::Schema(format!("missing shard index {i}")));
            }
            if range.lower != previous_upper {
                if i == 0 {
                    return Err(TesseraError::Schema(
                        "first shard range must have an open lower bound".into(),
                    ));
                }
                return Err(TesseraError::Schema(format!(
                    "shard {} lower bound {:?} does not match the previous upper bound {:?}",
                    range.index, range.lower, previous_upper
                )));
            }
            if !is_container_id(&range.cid) {
                return Err(TesseraError::Schema(format!(
                    "shard {} cid {:?} is not a container id",
                    range.index, range.cid
                )));
            }
            previous_upper = &range.upper;
        }
        if !previous_upper.is_empty() {
            return Err(TesseraError::Schema(
                "last shard range must have an open upper bound".into(),
            ));
        }
        Ok(())
    }

    /// Number of ranges in the table.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check whether the table holds no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over the ranges in ascending `index` order.
    pub fn iter(&self) -> impl Iterator<Item = &ShardRange> {
        self.ranges.iter()
    }

    /// The ranges in ascending `index` order.
    pub fn ranges(&self) -> &[ShardRange] {
        &self.ranges
    }
}
