mod clock;
mod commands;
pub mod config;
pub mod environment;
mod events;
mod snapshot;
mod tick;

pub use clock::{ClockState, SimulationClock};
pub use commands::ControllerCommands;
pub use config::{ClockConfig, ResolvedSimulation, SimulationConfig};
pub use environment::{AtmosphereConfig, Environment, EnvironmentConfig, Wind, WindConfig};
pub use events::{EnvironmentUpdate, SimulationToggle};
pub use snapshot::FlightSnapshot;
pub use tick::{TickDriver, TickInput, TickSource};
