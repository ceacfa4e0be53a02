use serde::{Deserialize, Serialize};

fn default_temperature_units() -> String {
    "C".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    /// Temperature at the surface, in `units`.
    pub surface_temperature: f64,
    /// `F` or `C`.
    #[serde(default = "default_temperature_units")]
    pub units: String,
}

impl Default for AtmosphereConfig {
    /// ISA standard day.
    fn default() -> Self {
        Self {
            surface_temperature: 15.0,
            units: default_temperature_units(),
        }
    }
}
