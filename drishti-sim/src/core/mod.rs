//! Core types for DrishtiSim.
//!
//! All types follow the ROS REP-103 coordinate convention:
//! - **X-axis**: Forward (positive ahead of robot)
//! - **Y-axis**: Left (positive to robot's left)
//! - **Theta**: Counter-clockwise rotation from +X axis (radians)
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`GridCoord`]: Signed integer cell indices (may be out of range)
//! - [`WorldPoint`]: Floating-point world coordinates in meters
//! - [`Pose2D`]: Position and heading, composable (robot ⊕ sensor mount)
//!
//! ### Sensors
//! - [`ScanRequest`] / [`LaserScan`]: laser scanner parameters and result
//! - [`SonarArray`] / [`SonarObservation`]: sonar cone parameters and result
//!
//! ### Noise
//! - [`NoiseSource`]: injected standard-normal sampler
//! - [`NoiseGenerator`]: seeded `SmallRng` implementation

mod math;
mod noise;
mod point;
mod pose;
mod sensors;

pub use math::{deg_to_rad, normalize_angle, rad_to_deg};
pub use noise::{NoNoise, NoiseGenerator, NoiseSource};
pub use point::{GridCoord, WorldPoint};
pub use pose::Pose2D;
pub use sensors::{
    LaserScan, RayTermination, ScanRequest, ScanSample, SonarArray, SonarObservation,
    SonarReading, SonarUnit, SweepDirection,
};
