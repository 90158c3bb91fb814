//! corridor — route between two arbitrary positions on a synthetic network.
//!
//! Snaps two coordinates to the nearest road points, routes between them
//! (both usually mid-road, not at intersections) and prints the expanded
//! route as JSON on stdout.  Set `RUST_LOG=debug` to see anchor and search
//! diagnostics on stderr.

mod network;

use anyhow::{Context, Result};
use log::{error, info};
use serde_json::json;

use ig_core::{GeoPoint, RoutingConfig};
use ig_graph::RoadGraph;
use ig_starter::{route, route_batch};

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const FROM: GeoPoint = GeoPoint { lat: 30.7041, lon: -88.0501 }; // Government St, north
const TO:   GeoPoint = GeoPoint { lat: 30.6800, lon: -88.0362 }; // Airport Blvd, east

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = RoutingConfig { max_speed_kmph: Some(60.0), ..Default::default() };
    config.validate()?;

    let graph = build_network(&config)?;
    info!("network: {} roads, {} joints", graph.road_count(), graph.num_joints());

    let start  = graph.snap(FROM).context("no road near start")?;
    let finish = graph.snap(TO).context("no road near finish")?;

    let r = route(&graph, start, finish, &config)?;
    info!(
        "route {start} -> {finish}: {} joints, {} points, {:.1} s",
        r.joints.len(),
        r.points.len(),
        r.total_secs()
    );

    // Reverse direction too: the one-way street forces a different path.
    let both = route_batch(&graph, &[(start, finish), (finish, start)], &config)?;
    let secs: Vec<Option<f32>> = both
        .iter()
        .map(|res| res.as_ref().ok().map(|r| r.total_secs()))
        .collect();

    let out = json!({
        "start": start.to_string(),
        "finish": finish.to_string(),
        "travel_secs": r.total_secs(),
        "points": r.points.iter().map(|p| p.to_string()).collect::<Vec<_>>(),
        "geometry": r.geometry(&graph),
        "batch_travel_secs": secs,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
