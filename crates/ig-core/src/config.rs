//! Routing configuration.

use crate::{CoreError, CoreResult};

/// Routing settings.
///
/// `default_speed_kmph` is a graph-build setting: it is read once, by
/// `DistanceEstimator::new`, and edge weights are fixed from then on.  The
/// other fields are read per query by `route` and `route_batch`.
///
/// Typically built in code by the application and passed to the router.
/// With the `serde` feature it can also be loaded from JSON/TOML.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingConfig {
    /// Speed assumed for roads that carry no speed of their own, when the
    /// graph's estimator is built from this config.  Default: 50 km/h.
    pub default_speed_kmph: f32,

    /// Upper bound on any road's speed.  Enables the A* heuristic
    /// (straight-line distance at this speed); `None` runs plain Dijkstra.
    pub max_speed_kmph: Option<f32>,

    /// Abort a search after settling this many vertices.  0 = unbounded.
    pub max_settled_joints: usize,

    /// Worker thread count for batch routing.  `None` uses Rayon's global pool.
    pub num_threads: Option<usize>,
}

impl RoutingConfig {
    /// Reject values that would make every weight meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.default_speed_kmph.is_finite() || self.default_speed_kmph <= 0.0 {
            return Err(CoreError::Config(format!(
                "default_speed_kmph must be positive, got {}",
                self.default_speed_kmph
            )));
        }
        if let Some(max) = self.max_speed_kmph {
            if !max.is_finite() || max <= 0.0 {
                return Err(CoreError::Config(format!(
                    "max_speed_kmph must be positive, got {max}"
                )));
            }
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }

    /// `default_speed_kmph` converted to metres per second.
    #[inline]
    pub fn default_speed_mps(&self) -> f32 {
        self.default_speed_kmph / 3.6
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            default_speed_kmph: 50.0,
            max_speed_kmph: None,
            max_settled_joints: 0,
            num_threads: None,
        }
    }
}
