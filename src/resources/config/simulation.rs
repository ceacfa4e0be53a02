use bevy::prelude::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::{AircraftConfig, AirframeProfile, ConfigError, StartConfig};
use crate::resources::{Environment, EnvironmentConfig, TickDriver, TickSource};
use crate::utils::{SimError, DEFAULT_MAX_FRAME_MS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Simulated time at which the clock is armed. Defaults to the wall-clock
    /// time of the first toggle.
    pub start_time: Option<DateTime<Utc>>,
    /// Longest frame the Bevy-time driver will credit in one tick.
    pub max_frame_ms: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start_time: None,
            max_frame_ms: DEFAULT_MAX_FRAME_MS,
        }
    }
}

impl ClockConfig {
    /// The driver for `source`. Bevy frame time is clamped to `max_frame_ms`.
    pub fn tick_driver(&self, source: TickSource) -> TickDriver {
        match source {
            TickSource::Manual => TickDriver::Manual,
            TickSource::BevyTime => TickDriver::BevyTime {
                max_frame_ms: self.max_frame_ms,
            },
        }
    }
}

/// Top-level configuration for one simulation session.
#[derive(Resource, Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub aircraft: AircraftConfig,
    pub start: StartConfig,
    pub environment: EnvironmentConfig,
    pub clock: ClockConfig,
}

/// A configuration that passed validation, ready to be spawned.
#[derive(Debug, Clone)]
pub struct ResolvedSimulation {
    pub aircraft: AircraftConfig,
    pub profile: AirframeProfile,
    pub start: StartConfig,
    pub environment: Environment,
    pub clock: ClockConfig,
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Loads the airframe and checks every section against it.
    pub fn resolve(&self) -> Result<ResolvedSimulation, ConfigError> {
        let profile = self.aircraft.airframe.load()?;
        self.start.validate(&profile)?;
        let environment = Environment::from_config(&self.environment)?;

        if !self.clock.max_frame_ms.is_finite() || self.clock.max_frame_ms <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "clock max_frame_ms must be positive, got {}",
                self.clock.max_frame_ms
            )));
        }

        Ok(ResolvedSimulation {
            aircraft: self.aircraft.clone(),
            profile,
            start: self.start.clone(),
            environment,
            clock: self.clock.clone(),
        })
    }
}
