mod aircraft;
mod airframe;
mod loader;
mod start;

pub use aircraft::{AircraftConfig, AirframeSource, AirframeType};
pub use airframe::{AirframeDynamics, AirframeLimits, AirframeProfile};
pub use loader::{ConfigError, RawAirframeConfig};
pub use start::StartConfig;
