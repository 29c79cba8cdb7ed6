//! Core type definitions and constants for the tessera partitioning core.
//!
//! # Type Aliases
//!
//! - [`ShardIndex`] = `u32`: position of a shard range among its siblings
//! - [`Timestamp`] = `i64`: generation marker of the split that produced
//!   a shard
//!
//! # Constants
//!
//! - [`CONTENT_PATH_MAX_LEN`]: how many bytes of an object path take part
//!   in shard bound comparisons
//! - [`CONTAINER_ID_HEX_LEN`]: length of a container id in hex characters

/// Position of a shard range among its siblings. The control plane
/// numbers the ranges of a partitioning contiguously from 0.
pub type ShardIndex = u32;

/// Generation marker of the split that produced a shard, shared by
/// every shard of the same split.
pub type Timestamp = i64;

/// Maximum number of bytes of an object path that take part in shard
/// bound comparisons. Paths that agree on their first
/// `CONTENT_PATH_MAX_LEN` bytes are routed to the same shard, matching
/// the path-length limit of the naming scheme.
pub const CONTENT_PATH_MAX_LEN: usize = 1024;

/// Length of a container id: 64 hexadecimal characters.
pub const CONTAINER_ID_HEX_LEN: usize = 64;
