//! `ig-starter` — route between arbitrary points on roads, not just joints.
//!
//! The indexed graph only knows joints (intersections).  A routing query
//! usually starts and ends mid-road, so each query builds a [`Starter`]:
//!
//! ```text
//!   RoadPoint ──► FakeJoint (anchor)            one per endpoint
//!   Starter::edges_list ──► search algorithm    real edges + anchor edges
//!   joint path ──► Starter::redress ──► Vec<RoadPoint>
//! ```
//!
//! Anchors get two ids past the real id space (`num_joints` for the start,
//! `num_joints + 1` for the finish).  The search sees plain `JointId`s; the
//! starter resolves them to [`Vertex`] internally.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                               |
//! |------------|------------------------------------------------------|
//! | `parallel` | [`route_batch`] runs queries on Rayon's thread pool. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ig_core::RoutingConfig;
//! use ig_starter::route;
//!
//! let start  = graph.snap(from_pos).unwrap();
//! let finish = graph.snap(to_pos).unwrap();
//! let r = route(&graph, start, finish, &RoutingConfig::default())?;
//! println!("{} points, {:.1} s", r.points.len(), r.total_secs());
//! ```

pub mod error;
pub mod fake_joint;
pub mod redress;
mod resolver;
pub mod route;
pub mod search;
pub mod starter;


pub use error::{StarterError, StarterResult};
pub use fake_joint::{Endpoint, FakeJoint, Vertex};
pub use route::{route, route_batch, Route};
pub use search::{AStarSearch, JointGraph, JointPath};
pub use starter::Starter;
