//! Default value functions for serde deserialization.

use std::f32::consts::PI;

pub fn occupancy_threshold() -> f32 {
    0.5
}

pub fn laser_aperture() -> f32 {
    PI
}

pub fn num_rays() -> usize {
    361
}

pub fn decimation() -> usize {
    1
}

pub fn laser_max_range() -> f32 {
    8.0
}

/// 20°
pub fn cone_aperture() -> f32 {
    20.0 * PI / 180.0
}

pub fn sonar_max_range() -> f32 {
    4.0
}
