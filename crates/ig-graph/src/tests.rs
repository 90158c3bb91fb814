//! Unit tests for ig-graph.
//!
//! All tests use hand-crafted graphs so they run without any map data.

#[cfg(test)]
mod helpers {
    use ig_core::{FeatureId, GeoPoint, JointId, RoadPoint};
    use crate::{Estimator, IndexGraph, IndexGraphBuilder, RoadGeometry};

    /// One second per point step, regardless of geometry.
    pub struct StepEstimator;

    impl Estimator for StepEstimator {
        fn edges_weight(&self, _road: &RoadGeometry, from: u32, to: u32) -> u32 {
            from.abs_diff(to) * 1_000
        }
    }

    /// `n` points spaced 0.001° apart along a meridian starting at `lat0`.
    pub fn line(lat0: f32, lon: f32, n: usize) -> Vec<GeoPoint> {
        (0..n).map(|i| GeoPoint::new(lat0 + i as f32 * 0.001, lon)).collect()
    }

    /// Two roads crossing at a shared joint.
    ///
    /// ```text
    ///              F1:0 (J3)
    ///                |
    ///  F0:0 ── F0:1 ── F0:2 ── F0:3 ── F0:4
    ///  (J0)           (J1)            (J2)
    ///                |
    ///              F1:2 (J4)
    /// ```
    ///
    /// F0 is bidirectional; F1 is one-way (F1:0 → F1:2).  F0:2 and F1:1 are
    /// the same joint J1.
    pub fn cross() -> (IndexGraph, FeatureId, FeatureId) {
        let mut b = IndexGraphBuilder::new();
        let f0 = b.add_road(RoadGeometry::new(line(0.0, 0.0, 5)));
        let f1 = b.add_road(
            RoadGeometry::new(vec![
                GeoPoint::new(0.002, 0.001),
                GeoPoint::new(0.002, 0.0),
                GeoPoint::new(0.002, -0.001),
            ])
            .one_way(),
        );
        b.add_joint(&[RoadPoint::new(f0, 0)]);
        b.add_joint(&[RoadPoint::new(f0, 2), RoadPoint::new(f1, 1)]);
        b.add_joint(&[RoadPoint::new(f0, 4)]);
        b.add_joint(&[RoadPoint::new(f1, 0)]);
        b.add_joint(&[RoadPoint::new(f1, 2)]);
        b.set_estimator(StepEstimator);
        (b.build().unwrap(), f0, f1)
    }

    pub fn targets(edges: &[ig_core::JointEdge]) -> Vec<JointId> {
        let mut t: Vec<_> = edges.iter().map(|e| e.target).collect();
        t.sort();
        t
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use ig_core::{FeatureId, GeoPoint, JointId, RoadPoint};
    use super::helpers::line;
    use crate::{GraphError, IndexGraphBuilder, RoadGeometry, RoadGraph};

    #[test]
    fn empty_build() {
        let graph = IndexGraphBuilder::new().build().unwrap();
        assert_eq!(graph.num_joints(), 0);
        assert_eq!(graph.road_count(), 0);
        assert!(graph.snap(GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn degenerate_road_rejected() {
        let mut b = IndexGraphBuilder::new();
        b.add_road(RoadGeometry::new(vec![GeoPoint::new(0.0, 0.0)]));
        assert!(matches!(b.build(), Err(GraphError::DegenerateRoad(FeatureId(0)))));
    }

    #[test]
    fn empty_joint_rejected() {
        let mut b = IndexGraphBuilder::new();
        b.add_road(RoadGeometry::new(line(0.0, 0.0, 2)));
        b.add_joint(&[]);
        assert!(matches!(b.build(), Err(GraphError::EmptyJoint(JointId(0)))));
    }

    #[test]
    fn out_of_range_point_rejected() {
        let mut b = IndexGraphBuilder::new();
        let f = b.add_road(RoadGeometry::new(line(0.0, 0.0, 3)));
        b.add_joint(&[RoadPoint::new(f, 3)]);
        assert!(matches!(
            b.build(),
            Err(GraphError::PointOutOfRange { len: 3, .. })
        ));
    }

    #[test]
    fn unknown_feature_rejected() {
        let mut b = IndexGraphBuilder::new();
        b.add_road(RoadGeometry::new(line(0.0, 0.0, 3)));
        b.add_joint(&[RoadPoint::new(FeatureId(9), 0)]);
        assert!(matches!(b.build(), Err(GraphError::Core(_))));
    }

    #[test]
    fn doubly_claimed_point_rejected() {
        let mut b = IndexGraphBuilder::new();
        let f = b.add_road(RoadGeometry::new(line(0.0, 0.0, 3)));
        b.add_joint(&[RoadPoint::new(f, 1)]);
        b.add_joint(&[RoadPoint::new(f, 1)]);
        match b.build() {
            Err(GraphError::PointAlreadyJoined { first, second, .. }) => {
                assert_eq!(first, JointId(0));
                assert_eq!(second, JointId(1));
            }
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("expected PointAlreadyJoined"),
        }
    }

    #[test]
    fn join_coincident_links_crossing_roads() {
        let mut b = IndexGraphBuilder::new();
        let f0 = b.add_road(RoadGeometry::new(line(0.0, 0.0, 3)));
        let f1 = b.add_road(RoadGeometry::new(vec![
            GeoPoint::new(0.001, -0.001),
            GeoPoint::new(0.001, 0.0), // same as F0:1
            GeoPoint::new(0.001, 0.001),
        ]));
        b.add_joint(&[RoadPoint::new(f0, 0)]);
        assert_eq!(b.join_coincident(), 1);

        let graph = b.build().unwrap();
        assert_eq!(graph.num_joints(), 2);
        let shared = graph.joint_at(RoadPoint::new(f0, 1)).unwrap();
        assert_eq!(graph.joint_at(RoadPoint::new(f1, 1)), Some(shared));
        assert_eq!(graph.joint_points(shared).len(), 2);
    }

    #[test]
    fn join_coincident_skips_claimed_points() {
        let mut b = IndexGraphBuilder::new();
        let f0 = b.add_road(RoadGeometry::new(line(0.0, 0.0, 2)));
        let f1 = b.add_road(RoadGeometry::new(line(0.0, 0.0, 2)));
        b.add_joint(&[RoadPoint::new(f0, 0), RoadPoint::new(f1, 0)]);
        // Only the far ends remain unclaimed.
        assert_eq!(b.join_coincident(), 1);
        assert!(b.build().is_ok());
    }
}

// ── Joint index ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod joints {
    use ig_core::{FeatureId, JointId, RoadPoint};
    use crate::RoadGraph;

    #[test]
    fn joint_at_and_points() {
        let (graph, f0, f1) = super::helpers::cross();
        assert_eq!(graph.num_joints(), 5);
        assert_eq!(graph.joint_at(RoadPoint::new(f0, 2)), Some(JointId(1)));
        assert_eq!(graph.joint_at(RoadPoint::new(f1, 1)), Some(JointId(1)));
        assert_eq!(graph.joint_at(RoadPoint::new(f0, 1)), None);
        assert_eq!(graph.joint_at(RoadPoint::new(FeatureId(42), 0)), None);
        assert_eq!(
            graph.joint_points(JointId(1)),
            &[RoadPoint::new(f0, 2), RoadPoint::new(f1, 1)]
        );
    }

    #[test]
    fn joint_lies_on_road() {
        let (graph, f0, f1) = super::helpers::cross();
        assert!(graph.joint_lies_on_road(JointId(1), f0));
        assert!(graph.joint_lies_on_road(JointId(1), f1));
        assert!(graph.joint_lies_on_road(JointId(0), f0));
        assert!(!graph.joint_lies_on_road(JointId(0), f1));
    }

    #[test]
    fn joint_pos_matches_point_pos() {
        let (graph, f0, _) = super::helpers::cross();
        assert_eq!(graph.joint_pos(JointId(2)), graph.point_pos(RoadPoint::new(f0, 4)));
    }
}

// ── Edge enumeration ──────────────────────────────────────────────────────────

#[cfg(test)]
mod sharing {
    use crate::{IndexGraph, RoadGraph};

    fn assert_sync<T: Sync + ?Sized>() {}

    #[test]
    fn graphs_are_sync() {
        assert_sync::<dyn RoadGraph>();
        assert_sync::<IndexGraph>();
    }
}

#[cfg(test)]
mod edges {
    use ig_core::{JointEdge, JointId, RoadPoint};
    use super::helpers::targets;
    use crate::RoadGraph;

    #[test]
    fn mid_segment_neighbors_both_ways() {
        let (graph, f0, _) = super::helpers::cross();
        let mut edges = Vec::new();
        graph.neighboring_edges(RoadPoint::new(f0, 1), true, &mut edges);
        assert_eq!(targets(&edges), vec![JointId(0), JointId(1)]);
        assert!(edges.iter().all(|e| e.weight_ms == 1_000));
    }

    #[test]
    fn neighbor_skips_to_nearest_joint() {
        let (graph, f0, _) = super::helpers::cross();
        let mut edges = Vec::new();
        graph.neighboring_edges(RoadPoint::new(f0, 3), true, &mut edges);
        edges.sort_by_key(|e| e.target);
        assert_eq!(
            edges,
            vec![JointEdge::new(JointId(1), 1_000), JointEdge::new(JointId(2), 1_000)]
        );
    }

    #[test]
    fn one_way_neighbors_follow_direction() {
        let (graph, _, f1) = super::helpers::cross();
        let mut out = Vec::new();
        graph.neighboring_edges(RoadPoint::new(f1, 1), true, &mut out);
        assert_eq!(targets(&out), vec![JointId(4)]);

        let mut inc = Vec::new();
        graph.neighboring_edges(RoadPoint::new(f1, 1), false, &mut inc);
        assert_eq!(targets(&inc), vec![JointId(3)]);
    }

    #[test]
    fn joint_edges_cover_every_incident_road() {
        let (graph, _, _) = super::helpers::cross();
        let mut out = Vec::new();
        graph.edges(JointId(1), true, &mut out);
        // F0 both ways, F1 forward only.
        assert_eq!(targets(&out), vec![JointId(0), JointId(2), JointId(4)]);

        let mut inc = Vec::new();
        graph.edges(JointId(1), false, &mut inc);
        assert_eq!(targets(&inc), vec![JointId(0), JointId(2), JointId(3)]);
    }

    #[test]
    fn end_of_one_way_has_no_outgoing() {
        let (graph, _, _) = super::helpers::cross();
        let mut out = Vec::new();
        graph.edges(JointId(4), true, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn directed_edge_respects_one_way() {
        let (graph, f0, f1) = super::helpers::cross();
        let mut edges = Vec::new();

        graph.directed_edge(f1, 0, 2, JointId(9), true, &mut edges);
        assert_eq!(edges, vec![JointEdge::new(JointId(9), 2_000)]);

        edges.clear();
        graph.directed_edge(f1, 2, 0, JointId(9), true, &mut edges);
        assert!(edges.is_empty());

        // Incoming from the far end is the same physical direction.
        graph.directed_edge(f1, 2, 0, JointId(9), false, &mut edges);
        assert_eq!(edges.len(), 1);

        edges.clear();
        graph.directed_edge(f0, 4, 1, JointId(9), true, &mut edges);
        assert_eq!(edges, vec![JointEdge::new(JointId(9), 3_000)]);
    }

    #[test]
    fn non_road_yields_nothing() {
        use ig_core::GeoPoint;
        use crate::{IndexGraphBuilder, RoadGeometry};

        let mut b = IndexGraphBuilder::new();
        let f = b.add_road(RoadGeometry::new(super::helpers::line(0.0, 0.0, 3)).not_routable());
        b.add_joint(&[RoadPoint::new(f, 0)]);
        b.add_joint(&[RoadPoint::new(f, 2)]);
        let graph = b.build().unwrap();

        let mut edges = Vec::new();
        graph.neighboring_edges(RoadPoint::new(f, 1), true, &mut edges);
        graph.edges(JointId(0), true, &mut edges);
        graph.directed_edge(f, 0, 2, JointId(1), true, &mut edges);
        assert!(edges.is_empty());
        // Non-roads are not snapping targets either.
        assert!(graph.snap(GeoPoint::new(0.0, 0.0)).is_none());
    }
}

// ── Estimator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod estimator {
    use ig_core::RoutingConfig;
    use super::helpers::line;
    use crate::{DistanceEstimator, Estimator, RoadGeometry};

    #[test]
    fn weight_is_symmetric() {
        let road = RoadGeometry::new(line(30.0, -88.0, 4));
        let est = DistanceEstimator::default();
        assert_eq!(est.edges_weight(&road, 0, 3), est.edges_weight(&road, 3, 0));
        assert_eq!(est.edges_weight(&road, 2, 2), 0);
    }

    #[test]
    fn road_speed_overrides_default() {
        let slow = RoadGeometry::new(line(30.0, -88.0, 2)).with_speed(25.0);
        let fast = RoadGeometry::new(line(30.0, -88.0, 2)).with_speed(100.0);
        let est = DistanceEstimator::new(&RoutingConfig::default());
        let w_slow = est.edges_weight(&slow, 0, 1);
        let w_fast = est.edges_weight(&fast, 0, 1);
        assert!(w_slow > 3 * w_fast, "slow {w_slow} fast {w_fast}");
    }

    #[test]
    fn default_speed_from_config() {
        // 0.001° latitude ≈ 111 m; at 36 km/h (10 m/s) ≈ 11.1 s.
        let road = RoadGeometry::new(line(0.0, 0.0, 2));
        let cfg = RoutingConfig { default_speed_kmph: 36.0, ..Default::default() };
        let w = DistanceEstimator::new(&cfg).edges_weight(&road, 0, 1);
        assert!((11_000..11_300).contains(&w), "got {w}");
    }

    #[test]
    fn weight_rounds_up_to_whole_ms() {
        let road = RoadGeometry::new(line(30.0, -88.0, 3));
        let cfg = RoutingConfig::default();
        let est = DistanceEstimator::new(&cfg);
        for (from, to) in [(0, 1), (1, 2), (0, 2)] {
            let exact_ms = road.length_m(from, to) / cfg.default_speed_mps() * 1000.0;
            let w = est.edges_weight(&road, from, to) as f32;
            assert!(w >= exact_ms && w - exact_ms < 1.0, "{w} vs {exact_ms}");
        }
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use ig_core::{GeoPoint, RoadPoint};

    #[test]
    fn snap_exact_and_nearest() {
        let (graph, f0, _) = super::helpers::cross();
        assert_eq!(graph.snap(GeoPoint::new(0.003, 0.0)), Some(RoadPoint::new(f0, 3)));
        assert_eq!(graph.snap(GeoPoint::new(0.0039, 0.0)), Some(RoadPoint::new(f0, 4)));
    }
}
