//! Which road connects two adjacent vertices?
//!
//! The search only reports joint ids.  To expand a path we need the road and
//! point range behind each hop.  Two joints can share several roads (a dual
//! carriageway, a loop), so every shared, traversable road is a candidate and
//! the cheapest wins.

use log::trace;

use ig_core::{JointId, RoadPoint};
use ig_graph::RoadGraph;

use crate::{StarterError, StarterResult};

/// Pick the cheapest `(rp0, rp1)` with `rp0 ∈ points0`, `rp1 ∈ points1` on a
/// common routable road, traversable from `rp0` to `rp1`.
///
/// The estimator is only consulted once a second candidate shows up; a
/// single candidate is returned without costing it.  Ties keep the
/// candidate found first.
///
/// `from` and `to` only label the error.
pub(crate) fn find_points_with_common_feature<G: RoadGraph + ?Sized>(
    graph: &G,
    from: JointId,
    to: JointId,
    points0: &[RoadPoint],
    points1: &[RoadPoint],
) -> StarterResult<(RoadPoint, RoadPoint)> {
    let estimator = graph.estimator();
    let mut best: Option<(RoadPoint, RoadPoint)> = None;
    let mut best_weight: Option<u32> = None;

    for &rp0 in points0 {
        for &rp1 in points1 {
            if rp0.feature != rp1.feature {
                continue;
            }
            let road = graph.road(rp0.feature);
            if !road.is_road {
                continue;
            }
            if road.one_way && rp0.point > rp1.point {
                continue;
            }

            let Some((best0, best1)) = best else {
                best = Some((rp0, rp1));
                continue;
            };

            let min_weight = *best_weight.get_or_insert_with(|| {
                estimator.edges_weight(graph.road(best0.feature), best0.point, best1.point)
            });
            let weight = estimator.edges_weight(road, rp0.point, rp1.point);
            if weight < min_weight {
                trace!("resolve {from}->{to}: {rp0}..{rp1} ({weight} ms) beats {best0}..{best1} ({min_weight} ms)");
                best = Some((rp0, rp1));
                best_weight = Some(weight);
            }
        }
    }

    best.ok_or(StarterError::AdjacencyNotFound { from, to })
}
