use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

impl FromStr for TemperatureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "F" | "f" | "degF" => Ok(TemperatureUnit::Fahrenheit),
            "C" | "c" | "degC" => Ok(TemperatureUnit::Celsius),
            other => Err(UnitError::Unsupported(other.to_string())),
        }
    }
}

/// A temperature reading.
///
/// Temperatures are affine rather than linear, so they do not fit the
/// `Quantity` scale-factor model and get their own type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    value: f64,
    unit: TemperatureUnit,
}

impl Temperature {
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    pub fn from_fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    pub fn from_celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// ISA sea-level temperature, 15 °C.
    pub fn standard_day_at_sea_level() -> Self {
        Self::from_celsius(crate::utils::ISA_SEA_LEVEL_TEMP - crate::utils::KELVIN_OFFSET)
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn fahrenheit(&self) -> f64 {
        match self.unit {
            TemperatureUnit::Fahrenheit => self.value,
            TemperatureUnit::Celsius => self.value * 9.0 / 5.0 + 32.0,
        }
    }

    pub fn celsius(&self) -> f64 {
        match self.unit {
            TemperatureUnit::Fahrenheit => (self.value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Celsius => self.value,
        }
    }

    pub fn kelvin(&self) -> f64 {
        self.celsius() + crate::utils::KELVIN_OFFSET
    }

    /// Returns a copy offset by `delta_celsius`, keeping the original unit.
    pub fn offset_celsius(&self, delta_celsius: f64) -> Self {
        match self.unit {
            TemperatureUnit::Fahrenheit => Self::from_fahrenheit(self.value + delta_celsius * 9.0 / 5.0),
            TemperatureUnit::Celsius => Self::from_celsius(self.value + delta_celsius),
        }
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self::standard_day_at_sea_level()
    }
}
