//! `ig-core` — foundational types for the index-graph router.
//!
//! This crate is a dependency of every other `ig-*` crate.  It has no
//! `ig-*` dependencies and only `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`ids`]        | `JointId`, `FeatureId`                                |
//! | [`road_point`] | `RoadPoint` — a `(feature, point index)` pair         |
//! | [`edge`]       | `JointEdge` — weighted edge with an implicit source   |
//! | [`geo`]        | `GeoPoint`, haversine distance                        |
//! | [`config`]     | `RoutingConfig`                                       |
//! | [`error`]      | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod edge;
pub mod error;
pub mod geo;
pub mod ids;
pub mod road_point;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RoutingConfig;
pub use edge::JointEdge;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{FeatureId, JointId};
pub use road_point::RoadPoint;
