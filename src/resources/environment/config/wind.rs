use serde::{Deserialize, Serialize};

fn default_speed_units() -> String {
    "kt".to_string()
}

/// Wind as written in a config file: where it blows from, and how hard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindConfig {
    /// Direction the wind is coming FROM (degrees, cardinal).
    pub direction: f64,
    /// Wind speed, in `units`.
    pub speed: f64,
    /// One of `kt`, `m/s`, `ft/s`, `km/h`.
    #[serde(default = "default_speed_units")]
    pub units: String,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            direction: 360.0,
            speed: 0.0,
            units: default_speed_units(),
        }
    }
}
