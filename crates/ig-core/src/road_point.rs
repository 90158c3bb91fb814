//! A position on a road, addressed by feature and point index.

use std::fmt;

use crate::FeatureId;

/// `(feature, point)` — `point` indexes into the feature's geometry.
///
/// Immutable value type.  Two road points are equal only when both the
/// feature and the point index match; geometric coincidence across features
/// is expressed through joints, not through `RoadPoint` equality.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadPoint {
    pub feature: FeatureId,
    pub point: u32,
}

impl RoadPoint {
    #[inline]
    pub const fn new(feature: FeatureId, point: u32) -> Self {
        Self { feature, point }
    }

    /// `true` if `other` lies on the same feature.
    #[inline]
    pub fn shares_feature(self, other: RoadPoint) -> bool {
        self.feature == other.feature
    }
}

impl fmt::Display for RoadPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}:{}", self.feature.0, self.point)
    }
}
