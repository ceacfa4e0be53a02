use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::{AirframeProfile, ConfigError};
use crate::components::aircraft::status::{BoardsStatus, ControlMode, GearStatus};

/// Initial attitude and position of the aircraft when it is spawned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// Heading (degrees, cardinal).
    pub heading: f64,
    /// Equivalent airspeed (kt).
    pub keas: f64,
    /// Altitude (ft).
    pub altitude: f64,
    /// Flight-path angle (degrees), positive up.
    pub pitch: f64,
    /// Bank (degrees), positive right wing down.
    pub bank: f64,
    /// Horizontal position relative to the start point, (east, north) in feet.
    pub position: Vector2<f64>,
    pub control_mode: ControlMode,
    pub gear: GearStatus,
    pub boards: BoardsStatus,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            heading: 360.0,
            keas: 120.0,
            altitude: 10_000.0,
            pitch: 0.0,
            bank: 0.0,
            position: Vector2::zeros(),
            control_mode: ControlMode::Manual,
            gear: GearStatus::Up,
            boards: BoardsStatus::None,
        }
    }
}

impl StartConfig {
    /// Checks the start point lies inside the airframe's envelope.
    pub fn validate(&self, profile: &AirframeProfile) -> Result<(), ConfigError> {
        let values = [
            ("heading", self.heading),
            ("keas", self.keas),
            ("altitude", self.altitude),
            ("pitch", self.pitch),
            ("bank", self.bank),
            ("position.x", self.position.x),
            ("position.y", self.position.y),
        ];
        if let Some((name, _)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "start {} must be finite",
                name
            )));
        }

        if self.keas < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "start keas must be non-negative, got {}",
                self.keas
            )));
        }

        let max_altitude = profile.limits().max_altitude.value();
        if self.altitude < 0.0 || self.altitude > max_altitude {
            return Err(ConfigError::ValidationError(format!(
                "start altitude {} ft is outside [0, {}] ft",
                self.altitude, max_altitude
            )));
        }

        let bank_limit = profile.bank_limit().value();
        if self.bank.abs() > bank_limit {
            return Err(ConfigError::ValidationError(format!(
                "start bank {} exceeds the {:.1} degree limit",
                self.bank, bank_limit
            )));
        }

        let pitch_limit = profile.pitch_limit().value();
        if self.pitch.abs() > pitch_limit {
            return Err(ConfigError::ValidationError(format!(
                "start pitch {} exceeds the {:.1} degree limit",
                self.pitch, pitch_limit
            )));
        }

        Ok(())
    }
}
