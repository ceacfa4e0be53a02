use bevy::prelude::*;

use crate::systems::simulation_running;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildEnvironment,
    BuildAircraft,
    /// First performance pass, so readouts are valid before the clock is armed.
    Initialise,
}

/// Per-frame order. Command, Estimate and Performance only run while the
/// clock is running; Publish always runs.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Clock,
    Command,
    Estimate,
    Performance,
    Publish,
}

pub struct FlightSchedulePlugin;

impl Plugin for FlightSchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (
                StartupStage::BuildEnvironment,
                StartupStage::BuildAircraft,
                StartupStage::Initialise,
            )
                .chain(),
        )
        .configure_sets(
            Update,
            (
                FlightSet::Input,
                FlightSet::Clock,
                FlightSet::Command,
                FlightSet::Estimate,
                FlightSet::Performance,
                FlightSet::Publish,
            )
                .chain(),
        )
        .configure_sets(Update, FlightSet::Command.run_if(simulation_running))
        .configure_sets(Update, FlightSet::Estimate.run_if(simulation_running))
        .configure_sets(Update, FlightSet::Performance.run_if(simulation_running));
    }
}
