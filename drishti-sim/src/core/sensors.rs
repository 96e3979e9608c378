//! Sensor request and result types.
//!
//! ## Sensor Types
//!
//! | Sensor | Request | Result |
//! |--------|---------|--------|
//! | Laser scanner | [`ScanRequest`] | [`LaserScan`] |
//! | Sonar ring | [`SonarArray`] | [`SonarObservation`] |
//!
//! ## Sweep Convention
//!
//! ```text
//!                heading
//!                   ↑
//!        +Φ/2  ╲    │    ╱  -Φ/2
//!               ╲   │   ╱
//!   LeftToRight  ╲  │  ╱  RightToLeft
//!   starts here   ╲ │ ╱   starts here
//!                  ╲│╱
//!                 sensor
//! ```
//!
//! Sensor mounting poses are in the robot frame (+X forward, +Y left).

use serde::{Deserialize, Serialize};

use super::point::WorldPoint;
use super::pose::Pose2D;

/// Direction in which a laser scanner sweeps its aperture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepDirection {
    /// Counter-clockwise: first ray at `heading - Φ/2`.
    #[default]
    RightToLeft,
    /// Clockwise: first ray at `heading + Φ/2`.
    LeftToRight,
}

/// Parameters for one simulated laser scan.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanRequest {
    /// Angular field of view in radians.
    pub aperture: f32,
    /// Sweep direction.
    pub sweep: SweepDirection,
    /// Scanner pose in the robot frame.
    pub sensor_pose: Pose2D,
    /// Maximum measurable range in meters.
    pub max_range: f32,
    /// Number of rays N (must be ≥ 2).
    pub num_rays: usize,
    /// Cast only every k-th ray (must be ≥ 1).
    pub decimation: usize,
    /// Range noise standard deviation (meters, 0 = none).
    pub range_noise_std: f32,
    /// Angular noise standard deviation (radians, 0 = none).
    pub angle_noise_std: f32,
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self {
            aperture: std::f32::consts::PI,
            sweep: SweepDirection::RightToLeft,
            sensor_pose: Pose2D::identity(),
            max_range: 8.0,
            num_rays: 361,
            decimation: 1,
            range_noise_std: 0.0,
            angle_noise_std: 0.0,
        }
    }
}

/// Why a ray stopped marching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RayTermination {
    /// Confident obstacle reached within the ray budget.
    Obstacle,
    /// Stopped on a cell with no committed observation.
    Unknown,
    /// Left the grid.
    OutOfBounds,
    /// Ray budget used up without hitting anything.
    Exhausted,
}

impl RayTermination {
    /// Whether this termination yields a valid range.
    #[inline]
    pub fn is_valid(self) -> bool {
        self == RayTermination::Obstacle
    }
}

/// One computed laser ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanSample {
    /// Simulated range in meters.
    pub range: f32,
    /// True only when an obstacle was detected.
    pub valid: bool,
    /// How the ray ended.
    pub termination: RayTermination,
}

/// Simulated laser scan.
///
/// Entries skipped by decimation are `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct LaserScan {
    /// Absolute sensor pose used for the scan.
    pub sensor_pose: Pose2D,
    /// Absolute angle of ray 0 (radians).
    pub start_angle: f32,
    /// Signed angle between consecutive rays.
    pub angle_increment: f32,
    /// Maximum range the scan was simulated with.
    pub max_range: f32,
    /// Per-ray samples, length N.
    pub samples: Vec<Option<ScanSample>>,
}

impl LaserScan {
    /// Number of ray slots (N).
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the scan has no ray slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Absolute angle of ray `index`.
    #[inline]
    pub fn angle(&self, index: usize) -> f32 {
        self.start_angle + index as f32 * self.angle_increment
    }

    /// Range of ray `index`, if it was computed.
    #[inline]
    pub fn range(&self, index: usize) -> Option<f32> {
        self.samples.get(index).copied().flatten().map(|s| s.range)
    }

    /// Whether ray `index` was computed and hit an obstacle.
    #[inline]
    pub fn is_valid(&self, index: usize) -> bool {
        matches!(self.samples.get(index), Some(Some(s)) if s.valid)
    }

    /// Iterate over computed rays as `(index, sample)`.
    pub fn iter_computed(&self) -> impl Iterator<Item = (usize, &ScanSample)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (i, s)))
    }

    /// Number of rays that were actually cast.
    pub fn computed_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_some()).count()
    }

    /// Number of rays with a valid obstacle return.
    pub fn valid_count(&self) -> usize {
        self.iter_computed().filter(|(_, s)| s.valid).count()
    }

    /// Endpoints of valid rays in world frame.
    pub fn to_world_points(&self) -> Vec<WorldPoint> {
        let origin = self.sensor_pose.position();
        self.iter_computed()
            .filter(|(_, s)| s.valid)
            .map(|(i, s)| {
                let (sin, cos) = self.angle(i).sin_cos();
                WorldPoint::new(origin.x + s.range * cos, origin.y + s.range * sin)
            })
            .collect()
    }
}

/// A single sonar transducer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SonarUnit {
    /// Transducer identifier.
    pub id: u16,
    /// Mounting pose in the robot frame.
    pub pose: Pose2D,
}

/// A set of sonar transducers sharing cone geometry and noise.
#[derive(Clone, Debug, PartialEq)]
pub struct SonarArray {
    /// Full cone aperture in radians (must be > 0).
    pub cone_aperture: f32,
    /// Maximum sensed distance in meters.
    pub max_range: f32,
    /// Range noise standard deviation (meters).
    pub range_noise_std: f32,
    /// Angular noise standard deviation (radians).
    pub angle_noise_std: f32,
    /// Transducers to simulate.
    pub units: Vec<SonarUnit>,
}

/// Reading of one sonar transducer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SonarReading {
    /// Transducer identifier.
    pub id: u16,
    /// Absolute transducer pose.
    pub sensor_pose: Pose2D,
    /// Nearest detected distance, or max range when nothing was detected.
    pub sensed_distance: f32,
    /// True if any sub-ray of the cone hit an obstacle.
    pub detected: bool,
}

/// Simulated readings of a [`SonarArray`], one per unit in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SonarObservation {
    /// Readings in the same order as the array's units.
    pub readings: Vec<SonarReading>,
}

impl SonarObservation {
    /// Reading for transducer `id`.
    pub fn get(&self, id: u16) -> Option<&SonarReading> {
        self.readings.iter().find(|r| r.id == id)
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True if there are no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
