//! Synthetic road network for the demo.
//!
//! A handful of roads loosely following downtown Mobile, Alabama.  Joints
//! are created wherever two roads share a vertex.

use anyhow::Result;

use ig_core::{GeoPoint, RoutingConfig};
use ig_graph::{DistanceEstimator, IndexGraph, IndexGraphBuilder, RoadGeometry};

/// `n + 1` evenly spaced points from `a` to `b` inclusive.  The ends are
/// copied exactly so that roads meeting there join.
fn polyline(a: GeoPoint, b: GeoPoint, n: usize) -> Vec<GeoPoint> {
    (0..=n)
        .map(|i| match i {
            0 => a,
            i if i == n => b,
            _ => {
                let t = i as f32 / n as f32;
                GeoPoint::new(a.lat + (b.lat - a.lat) * t, a.lon + (b.lon - a.lon) * t)
            }
        })
        .collect()
}

pub fn build_network(config: &RoutingConfig) -> Result<IndexGraph> {
    let downtown  = GeoPoint::new(30.695, -88.050);
    let north     = GeoPoint::new(30.710, -88.050);
    let commerce  = GeoPoint::new(30.695, -88.030);
    let connector = GeoPoint::new(30.680, -88.050);
    let midtown   = GeoPoint::new(30.680, -88.030);

    let mut b = IndexGraphBuilder::with_capacity(6, 8);

    // Government St, two-way arterial.
    b.add_road(RoadGeometry::new(polyline(north, downtown, 6)).with_speed(45.0));
    b.add_road(RoadGeometry::new(polyline(downtown, connector, 6)).with_speed(45.0));
    // Dauphin St, one-way eastbound.
    b.add_road(RoadGeometry::new(polyline(downtown, commerce, 8)).one_way().with_speed(40.0));
    // Airport Blvd, two-way with no posted speed.
    b.add_road(RoadGeometry::new(polyline(connector, midtown, 8)));
    // Commerce Dr, two-way.
    b.add_road(RoadGeometry::new(polyline(commerce, midtown, 6)).with_speed(35.0));
    // Pedestrian mall, not routable.
    b.add_road(RoadGeometry::new(polyline(downtown, midtown, 4)).not_routable());

    b.join_coincident();
    b.set_estimator(DistanceEstimator::new(config));
    Ok(b.build()?)
}
