//! Travel-time model.
//!
//! The graph never computes weights on its own; every edge weight comes from
//! an [`Estimator`].  Applications swap in their own model (per-road-class
//! speeds, live traffic, ...) by implementing the trait.

use ig_core::RoutingConfig;

use crate::RoadGeometry;

/// Cost of travelling along a sub-segment of one road.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a graph can be shared across
/// Rayon workers during batch routing.
pub trait Estimator: Send + Sync {
    /// Travel time in milliseconds between point indices `from` and `to` of
    /// `road`.  The order of the indices does not matter.
    fn edges_weight(&self, road: &RoadGeometry, from: u32, to: u32) -> u32;
}

/// Haversine length divided by the road's speed, rounded up to the next
/// millisecond.
///
/// Rounding up keeps every weight at or above the straight-line time, so an
/// A* heuristic that floors the straight-line time never overestimates a
/// multi-edge path.
#[derive(Clone, Debug)]
pub struct DistanceEstimator {
    default_speed_mps: f32,
}

impl DistanceEstimator {
    pub fn new(config: &RoutingConfig) -> Self {
        Self { default_speed_mps: config.default_speed_mps() }
    }

    fn speed_mps(&self, road: &RoadGeometry) -> f32 {
        match road.speed_kmph {
            Some(kmph) if kmph > 0.0 => kmph / 3.6,
            _ => self.default_speed_mps,
        }
    }
}

impl Default for DistanceEstimator {
    fn default() -> Self {
        Self::new(&RoutingConfig::default())
    }
}

impl Estimator for DistanceEstimator {
    fn edges_weight(&self, road: &RoadGeometry, from: u32, to: u32) -> u32 {
        let secs = road.length_m(from, to) / self.speed_mps(road);
        (secs * 1000.0).ceil() as u32
    }
}
