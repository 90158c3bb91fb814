//! Graph-construction error type.

use thiserror::Error;

use ig_core::{CoreError, FeatureId, JointId, RoadPoint};

/// Errors produced while building an [`IndexGraph`](crate::IndexGraph).
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("road {0} has fewer than two points")]
    DegenerateRoad(FeatureId),

    #[error("joint {0} has no road points")]
    EmptyJoint(JointId),

    #[error("{point} is out of range (road has {len} points)")]
    PointOutOfRange { point: RoadPoint, len: usize },

    #[error("{point} is claimed by both {first} and {second}")]
    PointAlreadyJoined {
        point:  RoadPoint,
        first:  JointId,
        second: JointId,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GraphResult<T> = Result<T, GraphError>;
