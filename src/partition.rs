//! Fault-plane height partitioning.
//!
//! Each pass splits the grid's [0,1]×[0,1] parameter space with a random
//! line, raises every vertex on the positive side by `delta` and lowers
//! every vertex on the negative side by `delta`. Vertices exactly on the
//! line keep their height.

use std::f64::consts::PI;

use glam::DVec2;
use itertools::Itertools;
use rand::Rng;

use crate::grid::Grid;

/// A line through `point` with unit `normal`, both in parameter space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultPlane {
    pub point: DVec2,
    pub normal: DVec2,
}

impl FaultPlane {
    pub fn new(point: DVec2, theta: f64) -> Self {
        return Self {
            point,
            normal: DVec2::new(theta.cos(), theta.sin()),
        };
    }

    /// Draw a fault whose point sits on the grid lattice and whose
    /// orientation is uniform in [0, 2π).
    pub fn random<R: Rng + ?Sized>(rng: &mut R, div: u32) -> Self {
        let div = div as f64;
        let point = DVec2::new(
            (rng.gen::<f64>() * div).floor() / div,
            (rng.gen::<f64>() * div).floor() / div,
        );
        let theta = 2. * PI * rng.gen::<f64>();
        return Self::new(point, theta);
    }

    /// Signed distance-like value of `p` relative to the fault line
    pub fn side(&self, p: DVec2) -> f64 {
        (p - self.point).dot(self.normal)
    }

    /// Displace every vertex of `grid` by `delta` according to its side.
    pub fn apply(&self, grid: &mut Grid, delta: f64) {
        let side = grid.row_stride();
        for (i, j) in (0..side).cartesian_product(0..side) {
            let s = self.side(grid.parameter(i, j));
            let index = grid.index(i, j);
            if s > 0. {
                grid.raise(index, delta);
            } else if s < 0. {
                grid.raise(index, -delta);
            }
        }
    }
}

/// Run `iterations` random fault passes over `grid`.
pub fn set_heights_by_partition<R: Rng + ?Sized>(
    grid: &mut Grid,
    iterations: u32,
    delta: f64,
    rng: &mut R,
) {
    set_heights_by_partition_with(grid, iterations, delta, rng, |_| {});
}

/// Same as [`set_heights_by_partition`], calling `on_pass` with the
/// zero-based index of each pass once it has been applied.
pub fn set_heights_by_partition_with<R, F>(
    grid: &mut Grid,
    iterations: u32,
    delta: f64,
    rng: &mut R,
    mut on_pass: F,
) where
    R: Rng + ?Sized,
    F: FnMut(u32),
{
    let div = grid.div();
    for pass in 0..iterations {
        FaultPlane::random(rng, div).apply(grid, delta);
        on_pass(pass);
    }
}
