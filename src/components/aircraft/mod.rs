pub mod commanded;
pub mod config;
mod identity;
pub mod snapshot;
pub mod state;
mod status;

pub use commanded::{AxisCommand, CommandedAttitude};
pub use config::{
    AircraftConfig, AirframeDynamics, AirframeLimits, AirframeProfile, AirframeSource,
    AirframeType, ConfigError, RawAirframeConfig, StartConfig,
};
pub use identity::AircraftIdentity;
pub use snapshot::AircraftSnapshot;
pub use state::{AircraftState, PerformanceValues, TurnRadius};
pub use status::{BoardsStatus, ControlMode, GearStatus};
