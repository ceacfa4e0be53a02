use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::aircraft::config::airframe::{
    AirframeDynamics, AirframeLimits, AirframeProfile,
};
use crate::units::{Degrees, Feet, UnitError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),
}

fn unit_compensator() -> f64 {
    1.0
}

/// Flat, on-disk form of an airframe profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAirframeConfig {
    /// Airframe identification
    pub name: String,

    /// Roll rate (deg/s) and installed-system effectiveness
    pub roll_rate: f64,
    #[serde(default = "unit_compensator")]
    pub roll_rate_compensator: f64,

    /// Pitch rate (deg/s) and installed-system effectiveness
    pub pitch_rate: f64,
    #[serde(default = "unit_compensator")]
    pub pitch_rate_compensator: f64,

    /// Speed-change rate (kt/s) and installed-system effectiveness
    pub speed_rate: f64,
    #[serde(default = "unit_compensator")]
    pub speed_rate_compensator: f64,

    /// Limits
    pub max_altitude_ft: f64,
    pub max_bank_deg: f64,
    pub max_pitch_deg: f64,
    pub max_load_factor: f64,
}

impl AirframeProfile {
    pub fn from_raw(raw: &RawAirframeConfig) -> Result<Self, ConfigError> {
        AirframeProfile::new(
            AirframeDynamics {
                roll_rate: raw.roll_rate,
                roll_rate_compensator: raw.roll_rate_compensator,
                pitch_rate: raw.pitch_rate,
                pitch_rate_compensator: raw.pitch_rate_compensator,
                speed_rate: raw.speed_rate,
                speed_rate_compensator: raw.speed_rate_compensator,
            },
            AirframeLimits {
                max_altitude: Feet::new(raw.max_altitude_ft),
                max_bank: Degrees::new(raw.max_bank_deg),
                max_pitch: Degrees::new(raw.max_pitch_deg),
                max_load_factor: raw.max_load_factor,
            },
        )
    }
}

impl From<&AirframeProfile> for RawAirframeConfig {
    fn from(profile: &AirframeProfile) -> Self {
        let dynamics = profile.dynamics();
        let limits = profile.limits();
        Self {
            name: String::new(),
            roll_rate: dynamics.roll_rate,
            roll_rate_compensator: dynamics.roll_rate_compensator,
            pitch_rate: dynamics.pitch_rate,
            pitch_rate_compensator: dynamics.pitch_rate_compensator,
            speed_rate: dynamics.speed_rate,
            speed_rate_compensator: dynamics.speed_rate_compensator,
            max_altitude_ft: limits.max_altitude.value(),
            max_bank_deg: limits.max_bank.value(),
            max_pitch_deg: limits.max_pitch.value(),
            max_load_factor: limits.max_load_factor,
        }
    }
}
