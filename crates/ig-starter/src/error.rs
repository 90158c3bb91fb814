//! Routing error type.
//!
//! `AdjacencyNotFound` and `ZeroLengthEdge` mean the search handed back a
//! path the graph cannot back up.  Neither is retried here.

use thiserror::Error;

use ig_core::{CoreError, FeatureId, JointId};

#[derive(Debug, Error)]
pub enum StarterError {
    #[error("no routable road connects {from} and {to}")]
    AdjacencyNotFound { from: JointId, to: JointId },

    #[error("zero-length edge at point {point} of {feature}")]
    ZeroLengthEdge { feature: FeatureId, point: u32 },

    #[error("no route from {from} to {to}")]
    NoRoute { from: JointId, to: JointId },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type StarterResult<T> = Result<T, StarterError>;
