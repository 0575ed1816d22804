//! Generation parameters for a fault-plane terrain.
//!
//! A [`TerrainConfig`] is a plain value: build one in code, deserialize it
//! from JSON, or start from [`Default`] and override fields.

use std::{fs, path::Path};

use glam::DVec3;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro128PlusPlus;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrainError};
use crate::normals::face_normal;

/// Default number of cells along each axis
pub const DEFAULT_DIV: u32 = 128;

/// Default half-extent of the terrain rectangle in world units
pub const DEFAULT_EXTENT: f64 = 2.0;

/// Default number of fault passes
pub const DEFAULT_ITERATIONS: u32 = 300;

/// Default height change applied per fault pass
pub const DEFAULT_DELTA: f64 = 0.005;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Cells along each axis; the grid has `div + 1` vertices per row
    pub div: u32,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    /// Number of fault passes
    pub iterations: u32,
    /// Height raised on the positive side and lowered on the negative side of each fault
    pub delta: f64,
    /// Seed for reproducible terrain, entropy when absent
    pub seed: Option<u64>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            div: DEFAULT_DIV,
            min_x: -DEFAULT_EXTENT,
            max_x: DEFAULT_EXTENT,
            min_y: -DEFAULT_EXTENT,
            max_y: DEFAULT_EXTENT,
            iterations: DEFAULT_ITERATIONS,
            delta: DEFAULT_DELTA,
            seed: None,
        }
    }
}

impl TerrainConfig {
    /// Flat terrain over the given rectangle, no fault passes
    pub fn flat(div: u32, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            div,
            min_x,
            max_x,
            min_y,
            max_y,
            iterations: 0,
            ..Self::default()
        }
    }

    pub fn with_faults(mut self, iterations: u32, delta: f64) -> Self {
        self.iterations = iterations;
        self.delta = delta;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source for the fault passes: seeded from `seed` when present,
    /// from entropy otherwise.
    pub fn fault_rng(&self) -> Xoshiro128PlusPlus {
        match self.seed {
            Some(seed) => Xoshiro128PlusPlus::seed_from_u64(seed),
            None => Xoshiro128PlusPlus::from_entropy(),
        }
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        return Self::from_json_str(&text);
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        return Ok(config);
    }

    /// Reject configurations the generator cannot build a grid from.
    pub fn validate(&self) -> Result<()> {
        if self.div < 1 {
            return Err(TerrainError::InvalidDivisions(self.div));
        }

        // row_stride² must stay addressable by u32 indices
        let row_stride = self.div as u64 + 1;
        if row_stride * row_stride > u32::MAX as u64 + 1 {
            return Err(TerrainError::TooManyVertices { div: self.div });
        }

        let x = check_axis('x', self.min_x, self.max_x, self.div)?;
        let y = check_axis('y', self.min_y, self.max_y, self.div)?;

        if !self.delta.is_finite() {
            return Err(TerrainError::NonFiniteDelta(self.delta));
        }

        // largest height difference two vertices can end up with
        let relief = 2. * self.iterations as f64 * self.delta.abs();
        if !relief.is_finite() {
            return Err(TerrainError::DisplacementOverflow {
                iterations: self.iterations,
                delta: self.delta,
            });
        }

        // the smallest cell must not underflow and the largest must not
        // overflow when its face normal is normalized
        let flat_cell = |dx: f64, dy: f64| face_normal(DVec3::ZERO, DVec3::X * dx, DVec3::Y * dy);
        if flat_cell(x.min_gap, y.min_gap).is_none() || flat_cell(x.max_gap, y.max_gap).is_none() {
            return Err(TerrainError::CellSizeOutOfRange {
                dx: x.step,
                dy: y.step,
            });
        }

        let steepest = face_normal(
            DVec3::ZERO,
            DVec3::new(x.max_gap, 0., relief),
            DVec3::new(0., y.max_gap, relief),
        );
        if steepest.is_none() {
            return Err(TerrainError::DisplacementOverflow {
                iterations: self.iterations,
                delta: self.delta,
            });
        }
        Ok(())
    }
}

/// Distance between neighbouring grid coordinates along one axis
pub(crate) fn axis_step(min: f64, max: f64, div: u32) -> f64 {
    (max - min) / div as f64
}

pub(crate) fn axis_coordinate(min: f64, step: f64, k: u32) -> f64 {
    min + step * k as f64
}

struct AxisSpacing {
    step: f64,
    min_gap: f64,
    max_gap: f64,
}

fn check_axis(axis: char, min: f64, max: f64, div: u32) -> Result<AxisSpacing> {
    // written so NaN bounds fail too
    let valid = min.is_finite() && max.is_finite() && min < max;
    if !valid {
        return Err(TerrainError::EmptyRange { axis, min, max });
    }

    let step = axis_step(min, max, div);
    if !(step.is_finite() && step > 0.) {
        return Err(TerrainError::UnresolvableSpacing { axis, div });
    }

    // neighbouring coordinates must stay distinct after rounding
    let mut spacing = AxisSpacing {
        step,
        min_gap: f64::INFINITY,
        max_gap: 0.,
    };
    let mut previous = min;
    for k in 1..=div {
        let coordinate = axis_coordinate(min, step, k);
        let gap = coordinate - previous;
        if !(gap.is_finite() && gap > 0.) {
            return Err(TerrainError::UnresolvableSpacing { axis, div });
        }
        spacing.min_gap = spacing.min_gap.min(gap);
        spacing.max_gap = spacing.max_gap.max(gap);
        previous = coordinate;
    }
    Ok(spacing)
}
