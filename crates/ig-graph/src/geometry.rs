//! Road geometry and attributes.

use ig_core::GeoPoint;

/// An ordered polyline with the attributes routing cares about.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadGeometry {
    pub points: Vec<GeoPoint>,

    /// Traversable only in ascending point order.
    pub one_way: bool,

    /// `false` for features that are not routable (footpaths in a car graph,
    /// construction, ...).  Non-roads yield no edges.
    pub is_road: bool,

    /// Free-flow speed.  `None` falls back to the estimator's default.
    pub speed_kmph: Option<f32>,
}

impl RoadGeometry {
    /// A routable, bidirectional road with no speed of its own.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points, one_way: false, is_road: true, speed_kmph: None }
    }

    pub fn one_way(mut self) -> Self {
        self.one_way = true;
        self
    }

    pub fn not_routable(mut self) -> Self {
        self.is_road = false;
        self
    }

    pub fn with_speed(mut self, kmph: f32) -> Self {
        self.speed_kmph = Some(kmph);
        self
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Polyline length in metres between two point indices, in either order.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn length_m(&self, from: u32, to: u32) -> f32 {
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        self.points[lo as usize..=hi as usize]
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .sum()
    }
}
