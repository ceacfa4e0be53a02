use bevy::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::config::EnvironmentConfig;
use crate::components::ConfigError;
use crate::units::{Bearing, Feet, Knots, MetersPerSecond, SpeedUnit, Temperature, TemperatureUnit};
use crate::utils::{
    DENSITY_FIT_C0, DENSITY_FIT_C1, DENSITY_FIT_C2, ISA_LAPSE_RATE, ISA_TROPOPAUSE_ALTITUDE,
    MPS_TO_KNOTS_FIT, SPEED_OF_SOUND_FIT_INTERCEPT, SPEED_OF_SOUND_FIT_SLOPE,
};

/// A steady wind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Direction the wind is coming FROM.
    direction_from: Bearing,
    speed: Knots,
}

impl Wind {
    pub fn new(direction_from: Bearing, speed: Knots) -> Result<Self, ConfigError> {
        if !speed.is_finite() || speed.value() < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "wind speed must be a non-negative number, got {}",
                speed
            )));
        }
        Ok(Self {
            direction_from,
            speed,
        })
    }

    pub fn calm() -> Self {
        Self {
            direction_from: Bearing::NORTH,
            speed: Knots::ZERO,
        }
    }

    pub fn direction_from(&self) -> Bearing {
        self.direction_from
    }

    /// Direction the wind is blowing TO.
    pub fn direction_to(&self) -> Bearing {
        self.direction_from.reciprocal()
    }

    pub fn speed(&self) -> Knots {
        self.speed
    }

    pub fn north_component(&self) -> Knots {
        self.speed * self.direction_to().radians().cos()
    }

    pub fn east_component(&self) -> Knots {
        self.speed * self.direction_to().radians().sin()
    }

    /// Wind velocity as (north, east) in knots.
    pub fn velocity(&self) -> Vector2<f64> {
        Vector2::new(self.north_component().value(), self.east_component().value())
    }
}

impl Default for Wind {
    fn default() -> Self {
        Self::calm()
    }
}

/// Ambient conditions the aircraft flies through.
///
/// Treated as immutable: to change the weather, replace the whole resource
/// (see `EnvironmentUpdate`).
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    wind: Wind,
    surface_temperature: Temperature,
}

impl Default for Environment {
    /// Zero wind on a standard day.
    fn default() -> Self {
        Self {
            wind: Wind::calm(),
            surface_temperature: Temperature::standard_day_at_sea_level(),
        }
    }
}

impl Environment {
    pub fn new(wind: Wind, surface_temperature: Temperature) -> Self {
        Self {
            wind,
            surface_temperature,
        }
    }

    pub fn from_config(config: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let speed_unit: SpeedUnit = config.wind.units.parse()?;
        let wind = Wind::new(
            Bearing::new(config.wind.direction),
            speed_unit.to_knots(config.wind.speed),
        )?;

        let temperature_unit: TemperatureUnit = config.atmosphere.units.parse()?;
        let surface_temperature =
            Temperature::new(config.atmosphere.surface_temperature, temperature_unit);

        Ok(Self::new(wind, surface_temperature))
    }

    pub fn wind(&self) -> Wind {
        self.wind
    }

    pub fn surface_temperature(&self) -> Temperature {
        self.surface_temperature
    }

    /// Air density (kg/m³) at `altitude`.
    ///
    /// Quadratic fit to the 1976 standard atmosphere over the band this
    /// trainer flies in. Outside that band the polynomial extrapolates.
    pub fn air_density(&self, altitude: Feet) -> f64 {
        let h = altitude.feet();
        DENSITY_FIT_C0 + DENSITY_FIT_C1 * h + DENSITY_FIT_C2 * h.powi(2)
    }

    /// Local speed of sound, linear in altitude.
    pub fn speed_of_sound(&self, altitude: Feet) -> Knots {
        let mps = SPEED_OF_SOUND_FIT_SLOPE * (altitude.feet() / 1_000.0)
            + SPEED_OF_SOUND_FIT_INTERCEPT;
        Knots::new(mps * MPS_TO_KNOTS_FIT)
    }

    /// Same as [`Environment::speed_of_sound`] in metres per second.
    pub fn speed_of_sound_mps(&self, altitude: Feet) -> MetersPerSecond {
        MetersPerSecond::new(self.speed_of_sound(altitude).value() / MPS_TO_KNOTS_FIT)
    }

    /// Outside air temperature: the surface temperature lapsed at the ISA
    /// rate up to the tropopause, constant above it.
    pub fn temperature_at_altitude(&self, altitude: Feet) -> Temperature {
        let height = altitude.meters().clamp(0.0, ISA_TROPOPAUSE_ALTITUDE);
        self.surface_temperature
            .offset_celsius(ISA_LAPSE_RATE * height)
    }
}
