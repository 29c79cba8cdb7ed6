//! Lifecycle state identifiers shared with the split orchestrator.
//!
//! Only the identifiers live here; the transition logic (write
//! buffering, locking, replay, cleanup) belongs to the orchestration
//! layer. The numeric values are part of the wire vocabulary and must
//! not change.

/// States of a root container while its listing is being split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootContainerState {
    /// Incoming writes are buffered for later replay on the shards.
    SavingWrites,
    /// The listing is locked while the shards are populated.
    Locked,
    /// The split completed and the shards are live.
    Sharded,
    /// The split was abandoned and its effects rolled back.
    Aborted,
}

impl RootContainerState {
    /// Stable numeric identifier used on the wire.
    pub fn value(self) -> u8 {
        match self {
            RootContainerState::SavingWrites => 1,
            RootContainerState::Locked => 2,
            RootContainerState::Sharded => 3,
            RootContainerState::Aborted => 4,
        }
    }

    /// Map a wire value back to a state.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(RootContainerState::SavingWrites),
            2 => Some(RootContainerState::Locked),
            3 => Some(RootContainerState::Sharded),
            4 => Some(RootContainerState::Aborted),
            _ => None,
        }
    }
}

/// States of a freshly created shard container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewShardState {
    /// Replaying the writes the root buffered during the split.
    ApplyingSavedWrites,
    /// Replay finished; the shard serves its range on its own.
    CleanedUp,
}

impl NewShardState {
    /// Stable numeric identifier used on the wire.
    pub fn value(self) -> u8 {
        match self {
            NewShardState::ApplyingSavedWrites => 128,
            NewShardState::CleanedUp => 129,
        }
    }

    /// Map a wire value back to a state.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            128 => Some(NewShardState::ApplyingSavedWrites),
            129 => Some(NewShardState::CleanedUp),
            _ => None,
        }
    }
}
