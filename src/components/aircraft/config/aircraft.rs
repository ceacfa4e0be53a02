use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{AirframeProfile, ConfigError, RawAirframeConfig};

/// Built-in airframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirframeType {
    Generic,
    Mq9,
}

impl AirframeType {
    pub fn profile(&self) -> AirframeProfile {
        match self {
            AirframeType::Generic => AirframeProfile::generic(),
            AirframeType::Mq9 => AirframeProfile::mq9(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AirframeType::Generic => "Generic UAV",
            AirframeType::Mq9 => "MQ-9",
        }
    }
}

/// Where an airframe profile comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AirframeSource {
    /// One of the built-in presets.
    Programmed(AirframeType),
    /// Values given inline.
    Custom(RawAirframeConfig),
    /// A YAML file holding a [`RawAirframeConfig`].
    File(PathBuf),
}

impl Default for AirframeSource {
    fn default() -> Self {
        AirframeSource::Programmed(AirframeType::Generic)
    }
}

impl AirframeSource {
    /// Resolves the source into a validated profile.
    pub fn load(&self) -> Result<AirframeProfile, ConfigError> {
        match self {
            AirframeSource::Programmed(airframe_type) => Ok(airframe_type.profile()),
            AirframeSource::Custom(raw) => AirframeProfile::from_raw(raw),
            AirframeSource::File(path) => Self::from_file(path),
        }
    }

    fn from_file<P: AsRef<Path>>(path: P) -> Result<AirframeProfile, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let raw: RawAirframeConfig = serde_yaml::from_str(&contents)?;
        AirframeProfile::from_raw(&raw)
    }
}

/// Identity plus airframe selection for the simulated aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    #[serde(default)]
    pub tail_number: String,
    #[serde(default)]
    pub airframe: AirframeSource,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self::programmed(AirframeType::Generic)
    }
}

impl AircraftConfig {
    pub fn programmed(airframe_type: AirframeType) -> Self {
        Self {
            name: airframe_type.display_name().to_string(),
            tail_number: String::new(),
            airframe: AirframeSource::Programmed(airframe_type),
        }
    }

    pub fn with_tail_number(mut self, tail_number: impl Into<String>) -> Self {
        self.tail_number = tail_number.into();
        self
    }
}
