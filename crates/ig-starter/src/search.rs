//! Search contract and the default A*/Dijkstra implementation.
//!
//! # Pluggability
//!
//! The search only sees the [`JointGraph`] trait, so a bidirectional search
//! or a contraction hierarchy can replace [`AStarSearch`] without touching
//! the starter.
//!
//! # Cost units
//!
//! All costs are in **milliseconds** (u32), matching `JointEdge::weight_ms`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use ig_core::{GeoPoint, JointEdge, JointId, RoutingConfig};

use crate::{StarterError, StarterResult};

// ── JointGraph ────────────────────────────────────────────────────────────────

/// What a search algorithm needs from the graph: positions and adjacency
/// over flat vertex ids.
pub trait JointGraph {
    fn vertex_pos(&self, vertex: JointId) -> GeoPoint;

    /// Replace `edges` with the edges of `vertex`.  Outgoing edges point at
    /// successors; incoming edges point at predecessors.
    fn edges_list(&self, vertex: JointId, outgoing: bool, edges: &mut Vec<JointEdge>);
}

// ── JointPath ─────────────────────────────────────────────────────────────────

/// The result of a search: vertex ids from source to target, inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct JointPath {
    pub joints: Vec<JointId>,
    pub total_ms: u32,
}

impl JointPath {
    /// `true` if source and target are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.joints.len() < 2
    }
}

// ── AStarSearch ───────────────────────────────────────────────────────────────

/// Forward A* over outgoing edges.
///
/// With `max_speed_kmph` unset the heuristic is zero and this is Dijkstra.
/// Per-query state lives in hash maps, so memory is proportional to the
/// vertices touched rather than the size of the graph.
#[derive(Clone, Debug)]
pub struct AStarSearch {
    max_speed_mps: Option<f32>,
    max_settled: usize,
}

impl AStarSearch {
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            max_speed_mps: config.max_speed_kmph.map(|kmph| kmph / 3.6),
            max_settled: config.max_settled_joints,
        }
    }

    /// Lower bound on the travel time from `pos` to `target`.  Floored, so it
    /// stays below any path whose edge weights were rounded up.
    #[inline]
    fn heuristic_ms(&self, pos: GeoPoint, target: GeoPoint) -> u32 {
        match self.max_speed_mps {
            Some(speed) => (pos.distance_m(target) / speed * 1000.0).floor() as u32,
            None => 0,
        }
    }

    pub fn find_path<J: JointGraph + ?Sized>(
        &self,
        graph: &J,
        from: JointId,
        to: JointId,
    ) -> StarterResult<JointPath> {
        if from == to {
            return Ok(JointPath { joints: vec![from], total_ms: 0 });
        }

        let target_pos = self.max_speed_mps.map(|_| graph.vertex_pos(to));
        let estimate = |v: JointId| match target_pos {
            Some(t) => self.heuristic_ms(graph.vertex_pos(v), t),
            None => 0,
        };

        // dist[v] = best known cost (ms) to reach v.
        let mut dist: FxHashMap<JointId, u32> = FxHashMap::default();
        let mut prev: FxHashMap<JointId, JointId> = FxHashMap::default();
        dist.insert(from, 0);

        // Min-heap on (estimated total, cost so far, vertex).  The vertex
        // breaks ties deterministically.
        let mut heap: BinaryHeap<Reverse<(u32, u32, JointId)>> = BinaryHeap::new();
        heap.push(Reverse((estimate(from), 0, from)));

        let mut edges = Vec::new();
        let mut settled = 0usize;

        while let Some(Reverse((_, cost, vertex))) = heap.pop() {
            // Skip stale heap entries.
            if dist.get(&vertex).is_some_and(|&d| cost > d) {
                continue;
            }

            if vertex == to {
                debug!("search {from}->{to}: {cost} ms, {settled} settled");
                return Ok(reconstruct(&prev, from, to, cost));
            }

            settled += 1;
            if self.max_settled > 0 && settled > self.max_settled {
                warn!("search {from}->{to}: gave up after {} settled vertices", self.max_settled);
                break;
            }

            graph.edges_list(vertex, true, &mut edges);
            for edge in &edges {
                let new_cost = cost.saturating_add(edge.weight_ms);
                if dist.get(&edge.target).is_none_or(|&d| new_cost < d) {
                    dist.insert(edge.target, new_cost);
                    prev.insert(edge.target, vertex);
                    heap.push(Reverse((
                        new_cost.saturating_add(estimate(edge.target)),
                        new_cost,
                        edge.target,
                    )));
                }
            }
        }

        Err(StarterError::NoRoute { from, to })
    }
}

fn reconstruct(
    prev: &FxHashMap<JointId, JointId>,
    from: JointId,
    to: JointId,
    total_ms: u32,
) -> JointPath {
    let mut joints = vec![to];
    let mut cur = to;
    while cur != from {
        match prev.get(&cur) {
            Some(&p) => {
                joints.push(p);
                cur = p;
            }
            None => break,
        }
    }
    joints.reverse();
    JointPath { joints, total_ms }
}
