//! Joint path → point sequence.

use std::cmp::Ordering;

use ig_core::{JointId, RoadPoint};
use ig_graph::RoadGraph;

use crate::{Starter, StarterError, StarterResult};

/// Expand a joint path into every road point it passes, in travel order.
///
/// - `[]` → `[]`
/// - `[v]` → the start anchor's point (start and finish coincide)
/// - otherwise each hop is resolved to a road and point range and walked
///   point by point; the joint shared by two hops appears once.
///
/// Fails with [`StarterError::AdjacencyNotFound`] if a hop has no common
/// road, and [`StarterError::ZeroLengthEdge`] if a hop resolves to a single
/// point.
pub fn redress<G: RoadGraph + ?Sized>(
    starter: &Starter<'_, G>,
    route: &[JointId],
) -> StarterResult<Vec<RoadPoint>> {
    match route {
        [] => return Ok(Vec::new()),
        [_] => return Ok(vec![starter.start().point()]),
        _ => {}
    }

    let mut points = Vec::with_capacity(route.len() * 2);

    for (i, hop) in route.windows(2).enumerate() {
        let (rp0, rp1) = starter.resolve(hop[0], hop[1])?;
        if i == 0 {
            points.push(rp0);
        }

        let feature = rp0.feature;
        match rp0.point.cmp(&rp1.point) {
            Ordering::Less => {
                points.extend((rp0.point + 1..rp1.point).map(|p| RoadPoint::new(feature, p)));
            }
            Ordering::Greater => {
                points.extend((rp1.point + 1..rp0.point).rev().map(|p| RoadPoint::new(feature, p)));
            }
            Ordering::Equal => {
                return Err(StarterError::ZeroLengthEdge { feature, point: rp0.point });
            }
        }

        points.push(rp1);
    }

    Ok(points)
}
