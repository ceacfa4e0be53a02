use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::ConfigError;
use crate::units::{Degrees, Feet};
use crate::utils::MAX_FITTED_ALTITUDE;

/// How quickly the airframe can change attitude and speed.
///
/// Each base rate is paired with a compensator representing how effective the
/// installed systems are; the rate actually achieved is `rate * compensator`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirframeDynamics {
    /// Roll rate (deg/s).
    pub roll_rate: f64,
    pub roll_rate_compensator: f64,
    /// Pitch (flight-path angle) rate (deg/s).
    pub pitch_rate: f64,
    pub pitch_rate_compensator: f64,
    /// Speed-change rate (kt/s).
    pub speed_rate: f64,
    pub speed_rate_compensator: f64,
}

impl AirframeDynamics {
    pub fn effective_roll_rate(&self) -> f64 {
        self.roll_rate * self.roll_rate_compensator
    }

    pub fn effective_pitch_rate(&self) -> f64 {
        self.pitch_rate * self.pitch_rate_compensator
    }

    pub fn effective_speed_rate(&self) -> f64 {
        self.speed_rate * self.speed_rate_compensator
    }
}

impl Default for AirframeDynamics {
    fn default() -> Self {
        Self {
            roll_rate: 10.0,
            roll_rate_compensator: 1.0,
            pitch_rate: 5.0,
            pitch_rate_compensator: 1.0,
            speed_rate: 5.0,
            speed_rate_compensator: 1.0,
        }
    }
}

/// The flight envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirframeLimits {
    pub max_altitude: Feet,
    /// Symmetric: the aircraft may bank up to this either way.
    pub max_bank: Degrees,
    /// Symmetric: climb and dive share the same limit.
    pub max_pitch: Degrees,
    pub max_load_factor: f64,
}

impl Default for AirframeLimits {
    fn default() -> Self {
        Self {
            max_altitude: Feet::new(10_000.0),
            max_bank: Degrees::new(60.0),
            max_pitch: Degrees::new(20.0),
            max_load_factor: 8.0,
        }
    }
}

/// Static per-type configuration. Validated on construction and never
/// mutated afterwards.
#[derive(Component, Debug, Clone, PartialEq, Serialize)]
pub struct AirframeProfile {
    dynamics: AirframeDynamics,
    limits: AirframeLimits,
}

impl Default for AirframeProfile {
    fn default() -> Self {
        Self::generic()
    }
}

impl AirframeProfile {
    pub fn new(dynamics: AirframeDynamics, limits: AirframeLimits) -> Result<Self, ConfigError> {
        validate_dynamics(&dynamics)?;
        validate_limits(&limits)?;
        Ok(Self { dynamics, limits })
    }

    /// A generic light UAV.
    pub fn generic() -> Self {
        Self {
            dynamics: AirframeDynamics::default(),
            limits: AirframeLimits::default(),
        }
    }

    /// General Atomics MQ-9.
    pub fn mq9() -> Self {
        Self {
            dynamics: AirframeDynamics {
                roll_rate_compensator: 0.6,
                ..Default::default()
            },
            limits: AirframeLimits {
                max_altitude: Feet::new(50_000.0),
                max_bank: Degrees::new(45.0),
                max_pitch: Degrees::new(20.0),
                max_load_factor: 2.5,
            },
        }
    }

    pub fn dynamics(&self) -> &AirframeDynamics {
        &self.dynamics
    }

    pub fn limits(&self) -> &AirframeLimits {
        &self.limits
    }

    /// The largest bank the aircraft may be commanded to.
    ///
    /// This is the configured bank limit, further reduced if holding that bank
    /// in a level turn would exceed the maximum load factor.
    pub fn bank_limit(&self) -> Degrees {
        let load_factor_bank = Degrees::from_radians((1.0 / self.limits.max_load_factor).acos());
        self.limits.max_bank.min(load_factor_bank)
    }

    pub fn pitch_limit(&self) -> Degrees {
        self.limits.max_pitch
    }
}

fn validate_dynamics(dynamics: &AirframeDynamics) -> Result<(), ConfigError> {
    let fields = [
        ("roll_rate", dynamics.roll_rate),
        ("roll_rate_compensator", dynamics.roll_rate_compensator),
        ("pitch_rate", dynamics.pitch_rate),
        ("pitch_rate_compensator", dynamics.pitch_rate_compensator),
        ("speed_rate", dynamics.speed_rate),
        ("speed_rate_compensator", dynamics.speed_rate_compensator),
    ];
    for (name, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{} must be a non-negative number, got {}",
                name, value
            )));
        }
    }
    Ok(())
}

fn validate_limits(limits: &AirframeLimits) -> Result<(), ConfigError> {
    let ceiling = limits.max_altitude.value();
    if !ceiling.is_finite() || !(0.0..=MAX_FITTED_ALTITUDE).contains(&ceiling) {
        return Err(ConfigError::ValidationError(format!(
            "max_altitude must be within [0, {}] ft, got {}",
            MAX_FITTED_ALTITUDE, limits.max_altitude
        )));
    }
    for (name, angle) in [("max_bank", limits.max_bank), ("max_pitch", limits.max_pitch)] {
        if !angle.is_finite() || angle.value() < 0.0 || angle.value() >= 90.0 {
            return Err(ConfigError::ValidationError(format!(
                "{} must be within [0, 90) degrees, got {}",
                name, angle
            )));
        }
    }
    if !limits.max_load_factor.is_finite() || limits.max_load_factor < 1.0 {
        return Err(ConfigError::ValidationError(format!(
            "max_load_factor must be at least 1, got {}",
            limits.max_load_factor
        )));
    }
    Ok(())
}
