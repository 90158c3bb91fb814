//! The per-query facade over the road graph.
//!
//! A [`Starter`] splices the two query endpoints into the graph's adjacency
//! without touching the graph itself:
//!
//! - the start and finish anchors answer `edges_list` with their
//!   *departure* edges: the nearest joints along their road, plus a direct
//!   edge to the other anchor when both lie on the same road;
//! - a real joint answers with its native edges plus *arrival* edges to each
//!   synthesized anchor whose road passes through it.

use log::debug;

use ig_core::{GeoPoint, JointEdge, JointId, RoadPoint};
use ig_graph::RoadGraph;

use crate::{Endpoint, FakeJoint, JointGraph, StarterResult, Vertex};

/// One routing query's view of the graph.
///
/// Immutable after construction.  Create one per query and drop it after
/// [`redress`](Self::redress).
pub struct Starter<'g, G: RoadGraph + ?Sized> {
    graph:  &'g G,
    start:  FakeJoint,
    finish: FakeJoint,
}

impl<'g, G: RoadGraph + ?Sized> Starter<'g, G> {
    /// Bind `start_point` and `finish_point` to the ids `num_joints` and
    /// `num_joints + 1`.
    ///
    /// If both points are identical the finish inherits the start's
    /// canonical id, so the two ends collapse onto one vertex.
    pub fn new(graph: &'g G, start_point: RoadPoint, finish_point: RoadPoint) -> Self {
        let first_free = JointId(graph.num_joints());

        let start = FakeJoint::new(start_point, first_free, graph.joint_at(start_point));
        let finish_joint = if finish_point == start_point {
            Some(start.canonical_id())
        } else {
            graph.joint_at(finish_point)
        };
        let finish = FakeJoint::new(finish_point, first_free.offset(1), finish_joint);

        debug!(
            "starter: start {} -> {} (synthesized: {}), finish {} -> {} (synthesized: {})",
            start_point,
            start.canonical_id(),
            start.is_synthesized(),
            finish_point,
            finish.canonical_id(),
            finish.is_synthesized(),
        );

        Self { graph, start, finish }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn start(&self) -> &FakeJoint {
        &self.start
    }

    pub fn finish(&self) -> &FakeJoint {
        &self.finish
    }

    pub fn anchor(&self, endpoint: Endpoint) -> &FakeJoint {
        match endpoint {
            Endpoint::Start => &self.start,
            Endpoint::Finish => &self.finish,
        }
    }

    /// Classify a flat id coming back from the search.
    pub fn vertex(&self, id: JointId) -> Vertex {
        if id == self.start.reserved_id() {
            Vertex::Anchor(Endpoint::Start)
        } else if id == self.finish.reserved_id() {
            Vertex::Anchor(Endpoint::Finish)
        } else {
            Vertex::Real(id)
        }
    }

    /// Geographic position of any vertex, anchors included.
    pub fn point_of(&self, id: JointId) -> GeoPoint {
        match self.vertex(id) {
            Vertex::Anchor(endpoint) => self.graph.point_pos(self.anchor(endpoint).point()),
            Vertex::Real(joint) => self.graph.joint_pos(joint),
        }
    }

    /// Road points incident to a vertex: every point of a real joint, or the
    /// single point of an anchor.
    pub fn points_of(&self, id: JointId) -> &[RoadPoint] {
        match self.vertex(id) {
            Vertex::Anchor(Endpoint::Start) => std::slice::from_ref(&self.start.point),
            Vertex::Anchor(Endpoint::Finish) => std::slice::from_ref(&self.finish.point),
            Vertex::Real(joint) => self.graph.joint_points(joint),
        }
    }

    /// Replace `edges` with the adjacency of `id` in the requested direction.
    ///
    /// No ordering is guaranteed.
    pub fn edges_list(&self, id: JointId, outgoing: bool, edges: &mut Vec<JointEdge>) {
        edges.clear();

        match self.vertex(id) {
            Vertex::Anchor(Endpoint::Start) => {
                self.fake_edges(&self.start, &self.finish, outgoing, edges);
            }
            Vertex::Anchor(Endpoint::Finish) => {
                self.fake_edges(&self.finish, &self.start, outgoing, edges);
            }
            Vertex::Real(joint) => {
                self.graph.edges(joint, outgoing, edges);
                self.arrival_edges(joint, &self.start, outgoing, edges);
                self.arrival_edges(joint, &self.finish, outgoing, edges);
            }
        }
    }

    /// Allocating form of [`edges_list`](Self::edges_list).
    pub fn edges(&self, id: JointId, outgoing: bool) -> Vec<JointEdge> {
        let mut edges = Vec::new();
        self.edges_list(id, outgoing, &mut edges);
        edges
    }

    /// Joint path → fully expanded road point sequence.  See
    /// [`redress`](crate::redress).
    pub fn redress(&self, route: &[JointId]) -> StarterResult<Vec<RoadPoint>> {
        crate::redress::redress(self, route)
    }

    /// The two road points that connect adjacent vertices `from` and `to`.
    pub fn resolve(&self, from: JointId, to: JointId) -> StarterResult<(RoadPoint, RoadPoint)> {
        crate::resolver::find_points_with_common_feature(
            self.graph,
            from,
            to,
            self.points_of(from),
            self.points_of(to),
        )
    }

    fn fake_edges(
        &self,
        from: &FakeJoint,
        to: &FakeJoint,
        outgoing: bool,
        edges: &mut Vec<JointEdge>,
    ) {
        let point = from.point();
        self.graph.neighboring_edges(point, outgoing, edges);

        // Coincident anchors share one vertex; a direct edge would be a
        // zero-length self-loop.
        if point != to.point() && point.shares_feature(to.point()) {
            self.graph.directed_edge(
                point.feature,
                point.point,
                to.point().point,
                to.canonical_id(),
                outgoing,
                edges,
            );
        }
    }

    /// Edges from real `joint` to `anchor`, weighted as the anchor's own
    /// edges back to `joint`.
    fn arrival_edges(
        &self,
        joint: JointId,
        anchor: &FakeJoint,
        outgoing: bool,
        edges: &mut Vec<JointEdge>,
    ) {
        if !anchor.is_synthesized() {
            return;
        }
        if !self.graph.joint_lies_on_road(joint, anchor.point().feature) {
            return;
        }

        let mut anchor_edges = Vec::new();
        self.graph.neighboring_edges(anchor.point(), !outgoing, &mut anchor_edges);
        edges.extend(
            anchor_edges
                .iter()
                .filter(|e| e.target == joint)
                .map(|e| JointEdge::new(anchor.reserved_id(), e.weight_ms)),
        );
    }
}

impl<G: RoadGraph + ?Sized> JointGraph for Starter<'_, G> {
    fn vertex_pos(&self, vertex: JointId) -> GeoPoint {
        self.point_of(vertex)
    }

    fn edges_list(&self, vertex: JointId, outgoing: bool, edges: &mut Vec<JointEdge>) {
        Starter::edges_list(self, vertex, outgoing, edges);
    }
}
