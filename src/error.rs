use std::io;

pub type Result<T> = std::result::Result<T, TerrainError>;

/// Errors that can occur while configuring or generating a terrain
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    #[error("terrain needs at least one division along each axis, got {0}")]
    InvalidDivisions(u32),
    #[error("empty {axis} range: min {min} must be less than max {max}")]
    EmptyRange { axis: char, min: f64, max: f64 },
    #[error("height displacement must be finite, got {0}")]
    NonFiniteDelta(f64),
    #[error("{axis} range cannot be split into {div} distinct finite steps")]
    UnresolvableSpacing { axis: char, div: u32 },
    #[error("cells of {dx} by {dy} are too small or too large for finite normals")]
    CellSizeOutOfRange { dx: f64, dy: f64 },
    #[error("{iterations} fault passes of height {delta} exceed the range finite normals can represent")]
    DisplacementOverflow { iterations: u32, delta: f64 },
    #[error("{div} divisions produce more vertices than 32-bit indices can address")]
    TooManyVertices { div: u32 },
    #[error("triangle {triangle} has zero area")]
    DegenerateFace { triangle: usize },
    #[error("vertex {vertex} has a zero-length accumulated normal")]
    DegenerateNormal { vertex: usize },
    #[error("failed to read or write terrain data: {0}")]
    Io(#[from] io::Error),
    #[error("invalid terrain config: {0}")]
    Config(#[from] serde_json::Error),
}
