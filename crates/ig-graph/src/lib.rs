//! `ig-graph` — the indexed road graph the router runs on.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`geometry`]    | `RoadGeometry` — polyline plus one-way/routable flags   |
//! | [`estimator`]   | `Estimator` trait, `DistanceEstimator`                  |
//! | [`graph`]       | `RoadGraph` — read-only query interface                 |
//! | [`index_graph`] | `IndexGraph` (CSR joints + R-tree), `IndexGraphBuilder` |
//! | [`error`]       | `GraphError`, `GraphResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod estimator;
pub mod geometry;
pub mod graph;
pub mod index_graph;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use estimator::{DistanceEstimator, Estimator};
pub use geometry::RoadGeometry;
pub use graph::RoadGraph;
pub use index_graph::{IndexGraph, IndexGraphBuilder};
