//! Procedural heightfield terrain built by random fault-plane partitioning.
//!
//! A [`Terrain`] is generated in four steps: a flat `(div+1)×(div+1)` grid
//! with a fixed triangulation, a number of random fault passes that raise
//! one side of a line and lower the other, smooth per-vertex normals from
//! the displaced triangles, and an edge list for wireframe drawing. The
//! results are exposed as flat buffers ready for upload to a renderer.

pub mod config;
pub mod edges;
pub mod error;
pub mod grid;
pub mod normals;
pub mod obj;
pub mod partition;
pub mod terrain;

pub use config::TerrainConfig;
pub use error::{Result, TerrainError};
pub use grid::Grid;
pub use partition::FaultPlane;
pub use terrain::{Terrain, TerrainStats};
