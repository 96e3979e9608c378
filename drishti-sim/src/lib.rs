//! # DrishtiSim
//!
//! 2D range sensor simulation over log-odds occupancy grids.
//!
//! ## Overview
//!
//! Given a grid and a robot pose, DrishtiSim produces the readings a real
//! sensor would return:
//!
//! - **Laser scanner** - N rays swept across an aperture, optionally decimated
//! - **Sonar array** - per-transducer cones, reading the nearest valid echo
//!
//! Every ray marches in fixed steps of one grid resolution, stops on the
//! first confident obstacle, and is marked invalid when it ends on unknown
//! space, leaves the map, or runs out of range.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti_sim::{NoiseGenerator, OccupancyGrid, Pose2D, ScanRequest, ScanSimulator};
//!
//! let grid = OccupancyGrid::load_ros_map("maps/room.yaml")?;
//! let simulator = ScanSimulator::new(&grid, 0.5)?;
//!
//! let mut noise = NoiseGenerator::new(42);
//! let scan = simulator.simulate(Pose2D::new(1.0, 2.0, 0.0), &ScanRequest::default(), &mut noise)?;
//!
//! println!("{} of {} rays hit an obstacle", scan.valid_count(), scan.len());
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of robot)
//! - Y: Left (positive to robot's left)
//! - Theta: Rotation in radians, CCW positive from +X axis

#![warn(missing_docs)]

// Core types
pub mod core;

// Error types
pub mod error;

// Grid storage and map loading
pub mod grid;

// Ray casting and sensor simulators
pub mod sim;

// Unified configuration
pub mod config;

// Re-export commonly used types
pub use crate::core::{
    GridCoord, LaserScan, NoNoise, NoiseGenerator, NoiseSource, Pose2D, RayTermination,
    ScanRequest, ScanSample, SonarArray, SonarObservation, SonarReading, SonarUnit,
    SweepDirection, WorldPoint,
};

pub use error::{Result, SimError};

pub use grid::{CellValue, GridAccessor, MapMetadata, OccupancyGrid};

pub use sim::{ConeSimulator, RayCaster, RayOutcome, RayParams, ScanSimulator};

pub use config::{ConfigLoadError, SimulationConfig};
