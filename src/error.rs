//! Error types for the tessera partitioning core.
//!
//! This module provides a unified error type [`TesseraError`] for all
//! tessera operations, along with a convenient [`Result`] type alias.
//!
//! # Error Categories
//!
//! - **MalformedInput**: the supplied text is not syntactically valid JSON
//! - **Schema**: valid JSON that violates the expected structure (missing
//!   field, wrong type, inconsistent shard layout)
//! - **OutOfRange**: a path falls outside the bounds being checked
//!
//! `OutOfRange` deserves special handling: it is not a defect but the
//! normal "wrong shard, re-route" answer of a shard's self-check. Callers
//! should test for it with [`TesseraError::is_out_of_range`] and refresh
//! their routing table instead of treating it as a fatal failure.
//!
//! # Example
//!
//! ```rust
//! use tessera::error::TesseraError;
//!
//! fn handle_error(err: &TesseraError) {
//!     if err.is_out_of_range() {
//!         println!("Re-routing request...");
//!     } else {
//!         println!("Broken payload: {}", err);
//!     }
//! }
//! ```

use thiserror::Error;

/// Main error type for tessera operations.
#[derive(Error, Debug)]
pub enum TesseraError {
    /// The supplied text is not syntactically valid JSON.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A required field is missing, has the wrong JSON type, or the
    /// payload violates a structural invariant of the shard layout.
    #[error("Schema error: {0}")]
    Schema(String),

    /// A path does not fall within the bounds being checked.
    #[error("Out of range: not managed by this shard")]
    OutOfRange,
}

impl TesseraError {
    /// Check if this is the routing signal a shard returns for a
    /// misdirected request. The caller should retry against the shard
    /// its (refreshed) routing table points to.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, TesseraError::OutOfRange)
    }

    /// Check if this is a structural decode failure, i.e. a broken
    /// payload rather than a routable condition.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            TesseraError::MalformedInput(_) | TesseraError::Schema(_)
        )
    }

    /// Classify a serde_json failure and wrap it with the prefix of the
    /// decoding stage that hit it.
    pub(crate) fn decode(stage: &str, err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => TesseraError::Schema(format!("{stage}: {err}")),
            _ => TesseraError::MalformedInput(format!("{stage}: {err}")),
        }
    }

    /// Wrap an existing decode failure with a stage prefix, leaving
    /// non-decode errors untouched.
    pub(crate) fn prefixed(self, stage: &str) -> Self {
        match self {
            TesseraError::MalformedInput(msg) => {
                TesseraError::MalformedInput(format!("{stage}: {msg}"))
            }
            TesseraError::Schema(msg) => TesseraError::Schema(format!("{stage}: {msg}")),
            other => other,
        }
    }
}

/// Result type alias for tessera operations.
pub type Result<T> = std::result::Result<T, TesseraError>;
