//! Tessera - the metadata-partitioning core of a distributed object store.
//!
//! When a container's key listing grows too large for a single metadata
//! node, its keyspace is split into ordered shard ranges, each hosted by
//! its own backing container. Tessera provides the data structures both
//! sides of that split rely on:
//!
//! - [`ShardRange`] / [`ShardRangeTable`]: the control plane's
//!   description of a partitioning, decoded by the routing layer to
//!   answer "which container owns this path".
//! - [`ShardInfo`]: the descriptor a shard container decodes at attach
//!   time and checks every incoming path against, as a defense against
//!   stale routing caches upstream.
//!
//! Ranges own the interval `(lower, upper]`: exclusive lower bound,
//! inclusive upper bound, empty string for an open end. Bound
//! comparisons look at the first 1024 bytes of a path, the path-length
//! limit of the naming scheme.
//!
//! All operations are pure, synchronous computations; tables and
//! descriptors are immutable after construction, so sharing one across
//! threads needs no locking.
//!
//! # Example
//!
//! ```rust
//! use tessera::{ShardInfo, ShardRangeTable};
//!
//! let table = ShardRangeTable::decode(concat!(
//!     r#"[{"index":0,"lower":"","upper":"m","cid":"A"},"#,
//!     r#"{"index":1,"lower":"m","upper":"","cid":"B"}]"#,
//! ))?;
//! assert_eq!(table.lookup("kiwi").map(|r| r.cid.as_str()), Some("A"));
//!
//! let info = ShardInfo::decode(
//!     r#"{"root_cid":"R","timestamp":1,"lower":"m","upper":""}"#,
//! )?;
//! assert!(info.check_range("pear").is_ok());
//! assert!(info.check_range("apple").unwrap_err().is_out_of_range());
//! # Ok::<(), tessera::TesseraError>(())
//! ```

pub mod error;
pub mod sharding;
pub mod types;

// Re-exports
pub use error::{Result, TesseraError};
pub use sharding::{ShardInfo, ShardRange, ShardRangeTable};
