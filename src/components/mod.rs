pub mod aircraft;

pub use aircraft::{
    AircraftConfig, AircraftIdentity, AircraftSnapshot, AircraftState, AirframeDynamics,
    AirframeLimits, AirframeProfile, AirframeSource, AirframeType, AxisCommand, BoardsStatus,
    CommandedAttitude, ConfigError, ControlMode, GearStatus, PerformanceValues, RawAirframeConfig,
    StartConfig, TurnRadius,
};
