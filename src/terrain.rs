use glam::DVec3;
use rand::Rng;
use tracing::{debug, info};

use crate::config::TerrainConfig;
use crate::edges::triangle_edges;
use crate::error::Result;
use crate::grid::Grid;
use crate::normals::vertex_normals;
use crate::partition::set_heights_by_partition_with;

/// A finished heightfield mesh: final heights, lighting normals, triangle
/// list and wireframe edge list.
///
/// Heights are fixed once a `Terrain` exists. To displace it further, take
/// the grid back with [`Terrain::into_grid`], mutate it, and build a new
/// `Terrain` from it so the normals follow the new heights.
#[derive(Debug, Clone)]
pub struct Terrain {
    grid: Grid,
    normals: Vec<DVec3>,
    edges: Vec<[u32; 2]>,
}

/// Summary of a generated terrain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainStats {
    pub vertices: usize,
    pub triangles: usize,
    pub edges: usize,
    pub min_height: f64,
    pub max_height: f64,
}

impl Terrain {
    /// Generate a terrain from `config`, seeding the fault sequence from
    /// `config.seed` when present and from entropy otherwise.
    pub fn new(config: &TerrainConfig) -> Result<Self> {
        return Self::generate(config, &mut config.fault_rng());
    }

    /// Generate a terrain drawing every fault from `rng`.
    pub fn generate<R: Rng + ?Sized>(config: &TerrainConfig, rng: &mut R) -> Result<Self> {
        Self::generate_with_progress(config, rng, |_| {})
    }

    /// Generate a terrain, calling `on_pass` after each fault pass.
    pub fn generate_with_progress<R, F>(
        config: &TerrainConfig,
        rng: &mut R,
        on_pass: F,
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
        F: FnMut(u32),
    {
        let mut grid = Grid::new(config)?;

        set_heights_by_partition_with(&mut grid, config.iterations, config.delta, rng, on_pass);
        debug!(
            "applied {} fault passes of height {}",
            config.iterations, config.delta
        );

        let terrain = Self::from_grid(grid)?;
        let stats = terrain.stats();
        info!(
            vertices = stats.vertices,
            triangles = stats.triangles,
            min_height = stats.min_height,
            max_height = stats.max_height,
            "generated terrain"
        );
        Ok(terrain)
    }

    /// Compute normals and edges for a grid whose heights are final.
    pub fn from_grid(grid: Grid) -> Result<Self> {
        let normals = vertex_normals(grid.positions(), grid.triangles())?;
        debug!("computed {} vertex normals", normals.len());

        let edges = triangle_edges(grid.triangles());
        debug!("generated {} wireframe edges", edges.len());

        return Ok(Self {
            grid,
            normals,
            edges,
        });
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn div(&self) -> u32 {
        self.grid.div()
    }

    pub fn vertex_count(&self) -> usize {
        self.grid.vertex_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.grid.triangle_count()
    }

    pub fn positions(&self) -> &[DVec3] {
        self.grid.positions()
    }

    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        self.grid.triangles()
    }

    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// xyz-interleaved vertex positions, ready for a float vertex buffer
    pub fn position_buffer(&self) -> Vec<f32> {
        flatten(self.positions())
    }

    /// xyz-interleaved vertex normals, same layout as [`Terrain::position_buffer`]
    pub fn normal_buffer(&self) -> Vec<f32> {
        flatten(&self.normals)
    }

    /// Three indices per triangle
    pub fn index_buffer(&self) -> Vec<u32> {
        self.triangles().iter().flatten().copied().collect()
    }

    /// Two indices per line segment
    pub fn edge_buffer(&self) -> Vec<u32> {
        self.edges.iter().flatten().copied().collect()
    }

    pub fn stats(&self) -> TerrainStats {
        let (min_height, max_height) = (0..self.vertex_count())
            .map(|index| self.grid.height(index))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), z| {
                (lo.min(z), hi.max(z))
            });

        TerrainStats {
            vertices: self.vertex_count(),
            triangles: self.triangle_count(),
            edges: self.edges.len(),
            min_height,
            max_height,
        }
    }
}

fn flatten(vectors: &[DVec3]) -> Vec<f32> {
    vectors
        .iter()
        .flat_map(|v| v.as_vec3().to_array())
        .collect()
}
