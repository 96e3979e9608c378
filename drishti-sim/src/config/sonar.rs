//! Sonar configuration section.

use serde::{Deserialize, Serialize};

use crate::core::{SonarArray, SonarUnit};

use super::defaults;

/// Sonar array settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SonarSection {
    /// Full cone aperture (radians)
    #[serde(default = "defaults::cone_aperture")]
    pub cone_aperture: f32,

    /// Maximum sensed distance (meters)
    #[serde(default = "defaults::sonar_max_range")]
    pub max_range: f32,

    /// Range noise stddev (meters)
    #[serde(default)]
    pub range_noise_std: f32,

    /// Angle noise stddev (radians)
    #[serde(default)]
    pub angle_noise_std: f32,

    /// Transducers with their mounting poses
    #[serde(default)]
    pub units: Vec<SonarUnit>,
}

impl Default for SonarSection {
    fn default() -> Self {
        Self {
            cone_aperture: defaults::cone_aperture(),
            max_range: defaults::sonar_max_range(),
            range_noise_std: 0.0,
            angle_noise_std: 0.0,
            units: Vec::new(),
        }
    }
}

impl SonarSection {
    /// Convert to a SonarArray
    pub fn to_sonar_array(&self) -> SonarArray {
        SonarArray {
            cone_aperture: self.cone_aperture,
            max_range: self.max_range,
            range_noise_std: self.range_noise_std,
            angle_noise_std: self.angle_noise_std,
            units: self.units.clone(),
        }
    }
}
