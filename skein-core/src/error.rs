//! Error types for the skein graph engine.
//!
//! The mutation and query contract reports expected conditions through
//! booleans and sentinels, never errors; only constructions that can be
//! misused return a [`GraphError`].

use thiserror::Error;

/// An error produced while constructing graph building blocks.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge was constructed with identical endpoints.
    #[error("edge endpoints must be distinct; self-loops are not representable")]
    SelfLoop,
    /// An adjacency matrix was constructed with too small a capacity.
    #[error("adjacency matrix capacity must be at least 2 (got {got})")]
    CapacityTooSmall {
        /// The capacity requested by the caller.
        got: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::SelfLoop => GraphErrorCode::SelfLoop,
            Self::CapacityTooSmall { .. } => GraphErrorCode::CapacityTooSmall,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// An edge was constructed with identical endpoints.
    SelfLoop,
    /// An adjacency matrix was constructed with too small a capacity.
    CapacityTooSmall,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelfLoop => "SELF_LOOP",
            Self::CapacityTooSmall => "CAPACITY_TOO_SMALL",
        }
    }
}
