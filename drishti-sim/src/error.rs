//! Error types for DrishtiSim

/// Result type alias
pub type Result<T> = std::result::Result<T, SimError>;

/// DrishtiSim error types
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A laser scan needs at least two rays
    #[error("Scan needs at least 2 rays, got {0}")]
    TooFewRays(usize),

    /// Decimation must be at least 1
    #[error("Decimation must be >= 1, got {0}")]
    InvalidDecimation(usize),

    /// Sonar cone aperture must be positive
    #[error("Cone aperture must be > 0, got {0}")]
    InvalidConeAperture(f32),

    /// Maximum range must be finite and non-negative
    #[error("Max range must be finite and >= 0, got {0}")]
    InvalidMaxRange(f32),

    /// Occupancy threshold outside (0, 1)
    #[error("Occupancy threshold must lie in (0, 1), got {0}")]
    InvalidThreshold(f32),

    /// Grid resolution must be finite and positive
    #[error("Grid resolution must be > 0, got {0}")]
    InvalidResolution(f32),

    /// Grid dimensions must be non-zero and addressable with i32 indices
    #[error("Invalid grid dimensions {size_x}x{size_y}")]
    InvalidDimensions {
        /// Requested width in cells
        size_x: usize,
        /// Requested height in cells
        size_y: usize,
    },

    /// Cell buffer does not match grid dimensions
    #[error("Cell count mismatch: expected {expected}, got {actual}")]
    CellCountMismatch {
        /// size_x * size_y
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    /// Map file could not be loaded
    #[error("Map error: {0}")]
    Map(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
