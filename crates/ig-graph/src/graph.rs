//! The read-only query interface the router consumes.
//!
//! Everything above the graph (the starter, the search) talks to it through
//! [`RoadGraph`] only.  Every method takes `&self`; there is no way to mutate
//! a graph through this trait.
//!
//! Implementations must be `Sync`: batch routing shares one graph across
//! worker threads.

use ig_core::{FeatureId, GeoPoint, JointEdge, JointId, RoadPoint};

use crate::{Estimator, RoadGeometry};

pub trait RoadGraph: Sync {
    /// Real joints occupy `0..num_joints()`.
    fn num_joints(&self) -> u32;

    /// Position of a real joint.
    fn joint_pos(&self, joint: JointId) -> GeoPoint;

    /// Position of an arbitrary road point.
    fn point_pos(&self, point: RoadPoint) -> GeoPoint;

    /// The joint located exactly at `point`, if any.
    fn joint_at(&self, point: RoadPoint) -> Option<JointId>;

    /// Every road point incident to `joint`.
    fn joint_points(&self, joint: JointId) -> &[RoadPoint];

    /// Native edges of `joint`, appended to `edges`.
    fn edges(&self, joint: JointId, outgoing: bool, edges: &mut Vec<JointEdge>);

    /// Edges from an arbitrary point to the nearest joint on its road, in
    /// each direction the road permits.  Appended to `edges`.
    fn neighboring_edges(&self, point: RoadPoint, outgoing: bool, edges: &mut Vec<JointEdge>);

    /// One edge along `feature` from point `from` to point `to`, labelled
    /// with `target`, if the road allows travel that way.  Appended to `edges`.
    fn directed_edge(
        &self,
        feature: FeatureId,
        from: u32,
        to: u32,
        target: JointId,
        outgoing: bool,
        edges: &mut Vec<JointEdge>,
    );

    /// `true` if one of `joint`'s points lies on `feature`.
    fn joint_lies_on_road(&self, joint: JointId, feature: FeatureId) -> bool;

    fn road(&self, feature: FeatureId) -> &RoadGeometry;

    fn estimator(&self) -> &dyn Estimator;
}
