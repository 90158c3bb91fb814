//! Weighted adjacency entry.

use crate::JointId;

/// A directed edge to `target`.
///
/// The source is implicit: it is whatever joint (or road point) the caller
/// asked for edges of.  For incoming queries the direction is reversed and
/// `target` is the edge's origin.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointEdge {
    pub target: JointId,
    /// Travel time in milliseconds.
    pub weight_ms: u32,
}

impl JointEdge {
    #[inline]
    pub const fn new(target: JointId, weight_ms: u32) -> Self {
        Self { target, weight_ms }
    }
}
