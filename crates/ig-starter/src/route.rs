//! End-to-end routing: anchor, search, redress.

use ig_core::{GeoPoint, JointId, RoadPoint, RoutingConfig};
use ig_graph::RoadGraph;

use crate::{AStarSearch, Starter, StarterResult};

/// A routed path between two road points.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Vertex ids as the search returned them, anchors included.
    pub joints: Vec<JointId>,
    /// Every road point along the way, in travel order.
    pub points: Vec<RoadPoint>,
    /// Total travel time in milliseconds.
    pub total_ms: u32,
}

impl Route {
    pub fn total_secs(&self) -> f32 {
        self.total_ms as f32 / 1000.0
    }

    /// `true` if start and finish coincide.
    pub fn is_trivial(&self) -> bool {
        self.joints.len() < 2
    }

    /// The route as coordinates, for rendering.
    pub fn geometry<G: RoadGraph + ?Sized>(&self, graph: &G) -> Vec<GeoPoint> {
        self.points.iter().map(|&p| graph.point_pos(p)).collect()
    }
}

/// Route from `start` to `finish`.
///
/// Builds a [`Starter`] for the pair, searches from the start's canonical id
/// to the finish's, and redresses the result.
///
/// Edge weights come from the graph's estimator; `config` only shapes the
/// search.  The whole config is still validated.
pub fn route<G: RoadGraph + ?Sized>(
    graph: &G,
    start: RoadPoint,
    finish: RoadPoint,
    config: &RoutingConfig,
) -> StarterResult<Route> {
    config.validate()?;
    route_validated(graph, start, finish, &AStarSearch::new(config))
}

fn route_validated<G: RoadGraph + ?Sized>(
    graph: &G,
    start: RoadPoint,
    finish: RoadPoint,
    search: &AStarSearch,
) -> StarterResult<Route> {
    let starter = Starter::new(graph, start, finish);
    let path = search.find_path(
        &starter,
        starter.start().canonical_id(),
        starter.finish().canonical_id(),
    )?;
    let points = starter.redress(&path.joints)?;
    Ok(Route { joints: path.joints, points, total_ms: path.total_ms })
}

/// Route many `(start, finish)` pairs against one graph.
///
/// Each query gets its own [`Starter`].  With the `parallel` feature the
/// queries run on Rayon (on a dedicated pool of `config.num_threads` workers
/// if set).  Results are in query order; a failed query does not stop the
/// others.
pub fn route_batch<G: RoadGraph + ?Sized>(
    graph: &G,
    queries: &[(RoadPoint, RoadPoint)],
    config: &RoutingConfig,
) -> StarterResult<Vec<StarterResult<Route>>> {
    config.validate()?;
    let search = AStarSearch::new(config);

    #[cfg(not(feature = "parallel"))]
    {
        Ok(queries
            .iter()
            .map(|&(start, finish)| route_validated(graph, start, finish, &search))
            .collect())
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        let run = || -> Vec<StarterResult<Route>> {
            queries
                .par_iter()
                .map(|&(start, finish)| route_validated(graph, start, finish, &search))
                .collect()
        };

        match config.num_threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| ig_core::CoreError::Config(format!("thread pool: {e}")))?;
                Ok(pool.install(run))
            }
            None => Ok(run()),
        }
    }
}
