//! Angle utilities.
//!
//! All angles are in radians, counter-clockwise positive (ROS REP-103).

use std::f32::consts::PI;

/// Two times PI (full circle in radians).
pub const TWO_PI: f32 = 2.0 * PI;

/// Normalize angle to [-π, π).
///
/// # Example
/// ```
/// use drishti_sim::core::normalize_angle;
/// use std::f32::consts::PI;
///
/// assert!((normalize_angle(PI / 2.0) - PI / 2.0).abs() < 1e-6);
/// assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-5);
/// ```
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TWO_PI;
    if a >= PI {
        a -= TWO_PI;
    } else if a < -PI {
        a += TWO_PI;
    }
    a
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}
