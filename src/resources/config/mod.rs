pub mod simulation;

pub use simulation::{ClockConfig, ResolvedSimulation, SimulationConfig};
