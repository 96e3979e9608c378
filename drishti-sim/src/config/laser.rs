//! Laser scanner configuration section.

use serde::{Deserialize, Serialize};

use crate::core::{Pose2D, ScanRequest, SweepDirection};

use super::defaults;

/// Laser scanner settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LaserSection {
    /// Field of view (radians)
    #[serde(default = "defaults::laser_aperture")]
    pub aperture: f32,

    /// Number of rays across the aperture
    #[serde(default = "defaults::num_rays")]
    pub num_rays: usize,

    /// Cast every k-th ray only
    #[serde(default = "defaults::decimation")]
    pub decimation: usize,

    /// Maximum range (meters)
    #[serde(default = "defaults::laser_max_range")]
    pub max_range: f32,

    /// Sweep direction
    #[serde(default)]
    pub sweep: SweepDirection,

    /// Mounting offset forward of robot center (meters)
    #[serde(default)]
    pub offset_x: f32,

    /// Mounting offset left of robot center (meters)
    #[serde(default)]
    pub offset_y: f32,

    /// Mounting yaw relative to robot heading (radians)
    #[serde(default)]
    pub offset_theta: f32,

    /// Range noise stddev (meters)
    #[serde(default)]
    pub range_noise_std: f32,

    /// Angle noise stddev (radians)
    #[serde(default)]
    pub angle_noise_std: f32,
}

impl Default for LaserSection {
    fn default() -> Self {
        Self {
            aperture: defaults::laser_aperture(),
            num_rays: defaults::num_rays(),
            decimation: defaults::decimation(),
            max_range: defaults::laser_max_range(),
            sweep: SweepDirection::default(),
            offset_x: 0.0,
            offset_y: 0.0,
            offset_theta: 0.0,
            range_noise_std: 0.0,
            angle_noise_std: 0.0,
        }
    }
}

impl LaserSection {
    /// Scanner mounting pose in the robot frame.
    pub fn mount_pose(&self) -> Pose2D {
        Pose2D::new(self.offset_x, self.offset_y, self.offset_theta)
    }

    /// Convert to a ScanRequest
    pub fn to_scan_request(&self) -> ScanRequest {
        ScanRequest {
            aperture: self.aperture,
            sweep: self.sweep,
            sensor_pose: self.mount_pose(),
            max_range: self.max_range,
            num_rays: self.num_rays,
            decimation: self.decimation,
            range_noise_std: self.range_noise_std,
            angle_noise_std: self.angle_noise_std,
        }
    }
}
