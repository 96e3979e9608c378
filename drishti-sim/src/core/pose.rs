//! 2D pose type for robot and sensor placement.
//!
//! Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left, Z-up (right-handed)
//! - Counter-clockwise positive rotation

use serde::{Deserialize, Serialize};

use super::math::normalize_angle;
use super::point::WorldPoint;

/// A 2D pose representing position and orientation.
///
/// Sensor mounting poses are expressed in the robot frame and composed with
/// the robot pose to obtain the absolute sensor pose:
///
/// ```
/// use drishti_sim::core::Pose2D;
/// use std::f32::consts::FRAC_PI_2;
///
/// let robot = Pose2D::new(1.0, 0.0, FRAC_PI_2);
/// let lidar_mount = Pose2D::new(0.1, 0.0, 0.0);
/// let sensor = robot.compose(lidar_mount);
/// assert!((sensor.y - 0.1).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters.
    pub x: f32,
    /// Y position in meters.
    pub y: f32,
    /// Heading angle in radians [-π, π), CCW positive from X-axis.
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose. Theta is normalized to [-π, π).
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Create an identity pose (origin, facing forward).
    #[inline]
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    /// Get the position as a WorldPoint.
    #[inline]
    pub fn position(self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    /// Transform a point from this pose's local frame to world frame.
    #[inline]
    pub fn transform_point(self, point: WorldPoint) -> WorldPoint {
        let (sin, cos) = self.theta.sin_cos();
        WorldPoint {
            x: self.x + point.x * cos - point.y * sin,
            y: self.y + point.x * sin + point.y * cos,
        }
    }

    /// Compose this pose with another (chain transformations).
    ///
    /// Returns a new pose representing: apply `other` in `self`'s frame.
    #[inline]
    pub fn compose(self, other: Pose2D) -> Self {
        let pos = self.transform_point(other.position());
        Self::new(pos.x, pos.y, self.theta + other.theta)
    }

    /// Compute the inverse of this pose.
    #[inline]
    pub fn inverse(self) -> Self {
        let (sin, cos) = self.theta.sin_cos();
        Self::new(
            -self.x * cos - self.y * sin,
            self.x * sin - self.y * cos,
            -self.theta,
        )
    }
}

impl std::ops::Add for Pose2D {
    type Output = Self;

    /// Pose composition, `robot + sensor_offset`.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.compose(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_new_normalizes_angle() {
        let pose = Pose2D::new(0.0, 0.0, 2.5 * PI);
        assert_relative_eq!(pose.theta, FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn test_transform_point() {
        let pose = Pose2D::new(1.0, 0.0, FRAC_PI_2);
        let world = pose.transform_point(WorldPoint::new(1.0, 0.0));
        assert_relative_eq!(world.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(world.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_compose() {
        let translate = Pose2D::new(1.0, 0.0, 0.0);
        let rotate = Pose2D::new(0.0, 0.0, FRAC_PI_2);

        let combined = translate.compose(rotate);
        assert_relative_eq!(combined.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(combined.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(combined.theta, FRAC_PI_2, epsilon = 1e-6);

        // Translation applied in the rotated frame
        let combined = rotate.compose(translate);
        assert_relative_eq!(combined.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(combined.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(combined.theta, FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_inverse() {
        let pose = Pose2D::new(1.0, 2.0, 0.5);
        let identity = pose.compose(pose.inverse());

        assert_relative_eq!(identity.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(identity.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(identity.theta, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_add_operator() {
        let a = Pose2D::new(1.0, 0.0, FRAC_PI_2);
        let b = Pose2D::new(1.0, 0.0, 0.0);
        assert_eq!(a + b, a.compose(b));
    }
}
