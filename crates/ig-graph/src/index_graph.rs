//! In-memory indexed road graph and its builder.
//!
//! # Data layout
//!
//! Joints are stored in **Compressed Sparse Row (CSR)** form.  Given a
//! `JointId j`, its road points occupy the slice:
//!
//! ```text
//! joint_points[ joint_offsets[j] .. joint_offsets[j+1] ]
//! ```
//!
//! The reverse direction (road point → joint) is a per-feature table with one
//! slot per geometry point, `JointId::INVALID` where no joint sits.  Walking
//! that table from any point finds the neighbouring joints along the road,
//! which is all edge enumeration needs: edges are never materialised.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest routable
//! `RoadPoint`.  Used to turn coordinate queries into road points.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::{FxHashMap, FxHashSet};

use ig_core::{CoreError, FeatureId, GeoPoint, JointEdge, JointId, RoadPoint};

use crate::{DistanceEstimator, Estimator, GraphError, GraphResult, RoadGeometry, RoadGraph};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct PointEntry {
    point: [f32; 2], // [lat, lon]
    road_point: RoadPoint,
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PointEntry {
    /// Squared Euclidean distance in lat/lon space.  Good enough for picking
    /// the nearest point within a city.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── IndexGraph ────────────────────────────────────────────────────────────────

/// Road geometries plus the joint index over them.
///
/// Immutable once built; share it behind `&` or `Arc` across queries.
/// Construct with [`IndexGraphBuilder`].
pub struct IndexGraph {
    roads: Vec<RoadGeometry>,

    /// CSR row pointer.  Length = `num_joints + 1`.
    joint_offsets: Vec<u32>,
    joint_points: Vec<RoadPoint>,

    /// `road_joints[f][p]` is the joint at `RoadPoint(f, p)`, or `INVALID`.
    road_joints: Vec<Vec<JointId>>,

    estimator: Box<dyn Estimator>,
    spatial_idx: RTree<PointEntry>,
}

impl IndexGraph {
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Nearest routable road point to `pos`.
    ///
    /// Returns `None` only if the graph has no routable roads.
    pub fn snap(&self, pos: GeoPoint) -> Option<RoadPoint> {
        self.spatial_idx
            .nearest_neighbor(&pos.to_array())
            .map(|e| e.road_point)
    }

    /// Nearest joint along the road from `point`, searching towards higher
    /// point indices if `forward`.  Returns the joint and its point index.
    fn find_neighbor(&self, point: RoadPoint, forward: bool) -> Option<(JointId, u32)> {
        let joints = &self.road_joints[point.feature.index()];
        if forward {
            (point.point + 1..joints.len() as u32)
                .find(|&p| joints[p as usize].is_valid())
                .map(|p| (joints[p as usize], p))
        } else {
            (0..point.point)
                .rev()
                .find(|&p| joints[p as usize].is_valid())
                .map(|p| (joints[p as usize], p))
        }
    }

    fn neighboring_edge(
        &self,
        road: &RoadGeometry,
        point: RoadPoint,
        forward: bool,
        edges: &mut Vec<JointEdge>,
    ) {
        if let Some((joint, neighbor)) = self.find_neighbor(point, forward) {
            let weight = self.estimator.edges_weight(road, point.point, neighbor);
            edges.push(JointEdge::new(joint, weight));
        }
    }
}

impl RoadGraph for IndexGraph {
    fn num_joints(&self) -> u32 {
        (self.joint_offsets.len() - 1) as u32
    }

    fn joint_pos(&self, joint: JointId) -> GeoPoint {
        self.point_pos(self.joint_points(joint)[0])
    }

    fn point_pos(&self, point: RoadPoint) -> GeoPoint {
        self.roads[point.feature.index()].points[point.point as usize]
    }

    fn joint_at(&self, point: RoadPoint) -> Option<JointId> {
        self.road_joints
            .get(point.feature.index())
            .and_then(|joints| joints.get(point.point as usize))
            .copied()
            .filter(|j| j.is_valid())
    }

    #[inline]
    fn joint_points(&self, joint: JointId) -> &[RoadPoint] {
        let start = self.joint_offsets[joint.index()] as usize;
        let end   = self.joint_offsets[joint.index() + 1] as usize;
        &self.joint_points[start..end]
    }

    fn edges(&self, joint: JointId, outgoing: bool, edges: &mut Vec<JointEdge>) {
        for &point in self.joint_points(joint) {
            self.neighboring_edges(point, outgoing, edges);
        }
    }

    fn neighboring_edges(&self, point: RoadPoint, outgoing: bool, edges: &mut Vec<JointEdge>) {
        let road = &self.roads[point.feature.index()];
        if !road.is_road {
            return;
        }

        let bidirectional = !road.one_way;
        if !outgoing || bidirectional {
            self.neighboring_edge(road, point, false, edges);
        }
        if outgoing || bidirectional {
            self.neighboring_edge(road, point, true, edges);
        }
    }

    fn directed_edge(
        &self,
        feature: FeatureId,
        from: u32,
        to: u32,
        target: JointId,
        outgoing: bool,
        edges: &mut Vec<JointEdge>,
    ) {
        let road = &self.roads[feature.index()];
        if !road.is_road {
            return;
        }
        if road.one_way && outgoing != (from < to) {
            return;
        }
        let weight = self.estimator.edges_weight(road, from, to);
        edges.push(JointEdge::new(target, weight));
    }

    fn joint_lies_on_road(&self, joint: JointId, feature: FeatureId) -> bool {
        self.joint_points(joint).iter().any(|p| p.feature == feature)
    }

    fn road(&self, feature: FeatureId) -> &RoadGeometry {
        &self.roads[feature.index()]
    }

    fn estimator(&self) -> &dyn Estimator {
        self.estimator.as_ref()
    }
}

// ── IndexGraphBuilder ─────────────────────────────────────────────────────────

/// Construct an [`IndexGraph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ig_core::{GeoPoint, RoadPoint};
/// use ig_graph::{IndexGraphBuilder, RoadGeometry, RoadGraph};
///
/// let mut b = IndexGraphBuilder::new();
/// let f = b.add_road(RoadGeometry::new(vec![
///     GeoPoint::new(30.69, -88.04),
///     GeoPoint::new(30.70, -88.04),
/// ]));
/// b.add_joint(&[RoadPoint::new(f, 0)]);
/// b.add_joint(&[RoadPoint::new(f, 1)]);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.num_joints(), 2);
/// ```
pub struct IndexGraphBuilder {
    roads:     Vec<RoadGeometry>,
    joints:    Vec<Vec<RoadPoint>>,
    estimator: Option<Box<dyn Estimator>>,
}

impl IndexGraphBuilder {
    pub fn new() -> Self {
        Self { roads: Vec::new(), joints: Vec::new(), estimator: None }
    }

    /// Pre-allocate for the expected number of roads and joints.
    pub fn with_capacity(roads: usize, joints: usize) -> Self {
        Self {
            roads:     Vec::with_capacity(roads),
            joints:    Vec::with_capacity(joints),
            estimator: None,
        }
    }

    /// Add a road and return its `FeatureId` (sequential from 0).
    pub fn add_road(&mut self, road: RoadGeometry) -> FeatureId {
        let id = FeatureId(self.roads.len() as u32);
        self.roads.push(road);
        id
    }

    /// Add a joint binding the given road points and return its `JointId`
    /// (sequential from 0).  Validated in [`build`](Self::build).
    pub fn add_joint(&mut self, points: &[RoadPoint]) -> JointId {
        let id = JointId(self.joints.len() as u32);
        self.joints.push(points.to_vec());
        id
    }

    /// Create a joint for every position shared by two or more road points
    /// not already bound to a joint.  Returns the number of joints created.
    ///
    /// Positions are compared bit-for-bit; nearly-equal coordinates are not
    /// merged.
    pub fn join_coincident(&mut self) -> usize {
        let claimed: FxHashSet<RoadPoint> = self.joints.iter().flatten().copied().collect();

        let mut slot_of: FxHashMap<(u32, u32), usize> = FxHashMap::default();
        let mut groups: Vec<Vec<RoadPoint>> = Vec::new();
        for (f, road) in self.roads.iter().enumerate() {
            for (p, pos) in road.points.iter().enumerate() {
                let rp = RoadPoint::new(FeatureId(f as u32), p as u32);
                if claimed.contains(&rp) {
                    continue;
                }
                let key = (pos.lat.to_bits(), pos.lon.to_bits());
                let slot = *slot_of.entry(key).or_insert_with(|| {
                    groups.push(Vec::new());
                    groups.len() - 1
                });
                groups[slot].push(rp);
            }
        }

        let before = self.joints.len();
        self.joints.extend(groups.into_iter().filter(|g| g.len() >= 2));
        self.joints.len() - before
    }

    /// Replace the default [`DistanceEstimator`].
    pub fn set_estimator(&mut self, estimator: impl Estimator + 'static) {
        self.estimator = Some(Box::new(estimator));
    }

    /// Consume the builder and produce an [`IndexGraph`].
    ///
    /// Fails if a road has fewer than two points, a joint is empty or
    /// references a point that does not exist, or two joints claim the same
    /// road point.
    pub fn build(self) -> GraphResult<IndexGraph> {
        for (f, road) in self.roads.iter().enumerate() {
            if road.point_count() < 2 {
                return Err(GraphError::DegenerateRoad(FeatureId(f as u32)));
            }
        }

        let mut road_joints: Vec<Vec<JointId>> = self
            .roads
            .iter()
            .map(|r| vec![JointId::INVALID; r.point_count()])
            .collect();

        let mut joint_offsets = Vec::with_capacity(self.joints.len() + 1);
        let mut joint_points = Vec::new();
        joint_offsets.push(0u32);

        for (j, points) in self.joints.iter().enumerate() {
            let joint = JointId(j as u32);
            if points.is_empty() {
                return Err(GraphError::EmptyJoint(joint));
            }
            for &point in points {
                let Some(slots) = road_joints.get_mut(point.feature.index()) else {
                    return Err(CoreError::FeatureNotFound(point.feature).into());
                };
                let len = slots.len();
                let Some(slot) = slots.get_mut(point.point as usize) else {
                    return Err(GraphError::PointOutOfRange { point, len });
                };
                if slot.is_valid() {
                    return Err(GraphError::PointAlreadyJoined {
                        point,
                        first:  *slot,
                        second: joint,
                    });
                }
                *slot = joint;
                joint_points.push(point);
            }
            joint_offsets.push(joint_points.len() as u32);
        }

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<PointEntry> = self
            .roads
            .iter()
            .enumerate()
            .filter(|(_, road)| road.is_road)
            .flat_map(|(f, road)| {
                road.points.iter().enumerate().map(move |(p, pos)| PointEntry {
                    point: pos.to_array(),
                    road_point: RoadPoint::new(FeatureId(f as u32), p as u32),
                })
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let estimator = self
            .estimator
            .unwrap_or_else(|| Box::new(DistanceEstimator::default()));

        Ok(IndexGraph {
            roads: self.roads,
            joint_offsets,
            joint_points,
            road_joints,
            estimator,
            spatial_idx,
        })
    }
}

impl Default for IndexGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
