//! Range sensor simulation over occupancy grids.
//!
//! - [`RayCaster`]: single-ray fixed-step marcher
//! - [`ScanSimulator`]: planar laser scanner (N rays over an aperture)
//! - [`ConeSimulator`]: sonar cones (minimum over sub-rays per unit)
//!
//! Both simulators borrow the grid immutably and draw all randomness from a
//! caller-supplied [`NoiseSource`](crate::core::NoiseSource).

mod laser;
mod raycaster;
mod sonar;

pub use laser::ScanSimulator;
pub use raycaster::{RayCaster, RayOutcome, RayParams};
pub use sonar::{CONE_RAY_SPACING, ConeSimulator, cone_ray_count};

use crate::error::{Result, SimError};
use crate::grid::{CellValue, probability_to_log_odds};

/// Log-odds a cell must strictly exceed for rays to pass through it.
///
/// `occupancy_threshold` is the occupied probability above which a cell
/// counts as an obstacle, and must lie in (0, 1).
pub fn free_threshold(occupancy_threshold: f32) -> Result<CellValue> {
    if !(occupancy_threshold > 0.0 && occupancy_threshold < 1.0) {
        return Err(SimError::InvalidThreshold(occupancy_threshold));
    }
    Ok(probability_to_log_odds(1.0 - occupancy_threshold))
}
