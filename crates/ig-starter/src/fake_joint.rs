//! Query endpoints and the vertex tag the starter dispatches on.

use ig_core::{JointId, RoadPoint};

/// Which end of the query an anchor belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Endpoint {
    Start,
    Finish,
}

/// A vertex id as seen by the starter.
///
/// The search works on flat `JointId`s; [`Starter::vertex`](crate::Starter::vertex)
/// maps them back to this tag.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Vertex {
    Real(JointId),
    Anchor(Endpoint),
}

/// A query endpoint bound into the joint id space.
///
/// `reserved_id` is the id allocated to this endpoint for the query.
/// `canonical_id` is the id the search should use for it: the real joint if
/// `point` sits exactly on one, otherwise `reserved_id`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FakeJoint {
    pub(crate) point: RoadPoint,
    pub(crate) reserved_id: JointId,
    pub(crate) canonical_id: JointId,
}

impl FakeJoint {
    /// `suggested` is the joint found at `point` (or inherited from the other
    /// endpoint); `None` makes the anchor synthesized.
    pub fn new(point: RoadPoint, reserved_id: JointId, suggested: Option<JointId>) -> Self {
        Self {
            point,
            reserved_id,
            canonical_id: suggested.unwrap_or(reserved_id),
        }
    }

    #[inline]
    pub fn point(&self) -> RoadPoint {
        self.point
    }

    #[inline]
    pub fn reserved_id(&self) -> JointId {
        self.reserved_id
    }

    #[inline]
    pub fn canonical_id(&self) -> JointId {
        self.canonical_id
    }

    /// `true` when no real joint stands in for this endpoint.
    #[inline]
    pub fn is_synthesized(&self) -> bool {
        self.canonical_id == self.reserved_id
    }
}
