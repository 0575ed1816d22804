use glam::{DVec2, DVec3};
use itertools::Itertools;

use tracing::debug;

use crate::config::{axis_coordinate, axis_step, TerrainConfig};
use crate::error::Result;

/// Regular (div+1)×(div+1) vertex grid and its fixed triangulation.
///
/// Vertices are stored row-major: row `i` walks y from `min_y` to `max_y`,
/// column `j` walks x from `min_x` to `max_x`. Only the z component of a
/// position is ever changed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    div: u32,
    positions: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl Grid {
    /// Validate `config` and build the flat grid with every height at zero.
    pub fn new(config: &TerrainConfig) -> Result<Self> {
        config.validate()?;

        let div = config.div;
        let delta_x = axis_step(config.min_x, config.max_x, div);
        let delta_y = axis_step(config.min_y, config.max_y, div);

        let positions = (0..=div)
            .cartesian_product(0..=div)
            .map(|(i, j)| {
                DVec3::new(
                    axis_coordinate(config.min_x, delta_x, j),
                    axis_coordinate(config.min_y, delta_y, i),
                    0.,
                )
            })
            .collect::<Vec<DVec3>>();

        let row_stride = div + 1;
        let triangles = (0..div)
            .cartesian_product(0..div)
            .flat_map(|(i, j)| {
                let vid = i * row_stride + j;
                [
                    [vid, vid + 1, vid + row_stride],
                    [vid + 1, vid + 1 + row_stride, vid + row_stride],
                ]
            })
            .collect::<Vec<[u32; 3]>>();

        debug!(
            "built {} vertices and {} triangles for a {}x{} grid",
            positions.len(),
            triangles.len(),
            div,
            div
        );

        return Ok(Self {
            div,
            positions,
            triangles,
        });
    }

    pub fn div(&self) -> u32 {
        self.div
    }

    pub fn row_stride(&self) -> usize {
        self.div as usize + 1
    }

    /// Linear vertex index of row `i`, column `j`
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= self.div as usize && j <= self.div as usize);
        i * self.row_stride() + j
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn vertex(&self, i: usize, j: usize) -> DVec3 {
        self.positions[self.index(i, j)]
    }

    /// Position of the vertex in the grid's [0,1]×[0,1] parameter space
    pub fn parameter(&self, i: usize, j: usize) -> DVec2 {
        let div = self.div as f64;
        DVec2::new(j as f64 / div, i as f64 / div)
    }

    pub fn height(&self, index: usize) -> f64 {
        self.positions[index].z
    }

    pub(crate) fn raise(&mut self, index: usize, amount: f64) {
        self.positions[index].z += amount;
    }

    /// Iterate `(i, j)` over every vertex in row-major order
    pub fn grid_points(&self) -> impl Iterator<Item = (usize, usize)> {
        let side = self.row_stride();
        (0..side).cartesian_product(0..side)
    }
}
