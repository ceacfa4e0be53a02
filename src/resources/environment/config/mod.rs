mod atmosphere;
mod wind;

pub use atmosphere::AtmosphereConfig;
pub use wind::WindConfig;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub wind: WindConfig,
    #[serde(default)]
    pub atmosphere: AtmosphereConfig,
}

impl EnvironmentConfig {
    pub fn new(wind: WindConfig, atmosphere: AtmosphereConfig) -> Self {
        Self { wind, atmosphere }
    }

    /// A constant wind given in knots, blowing from `wind_direction` degrees.
    pub fn with_constant_wind(wind_speed: f64, wind_direction: f64) -> Self {
        Self {
            wind: WindConfig {
                direction: wind_direction,
                speed: wind_speed,
                ..Default::default()
            },
            atmosphere: AtmosphereConfig::default(),
        }
    }
}
