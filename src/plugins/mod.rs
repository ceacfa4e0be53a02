mod aircraft;
mod clock;
mod environment;
mod staging;

pub use aircraft::{add_simulation_plugins, AircraftPlugin};
pub use clock::ClockPlugin;
pub use environment::EnvironmentPlugin;
pub use staging::{FlightSchedulePlugin, FlightSet, StartupStage};
