//! Container sharding: shard-range records, the routing table, and the
//! per-shard descriptor.
//!
//! A root container whose listing grows too large is split into ordered
//! shard ranges, each hosted by its own backing container. The routing
//! layer decodes the control plane's description of the split into a
//! [`ShardRangeTable`] and asks it which container owns a given path;
//! each shard decodes its own [`ShardInfo`] and checks every incoming
//! path against its recorded bounds.

pub mod info;
pub mod naming;
pub mod range;
pub mod state;
pub mod table;

pub use info::ShardInfo;
pub use range::{PathPosition, ShardRange};
pub use state::{NewShardState, RootContainerState};
pub use table::ShardRangeTable;
