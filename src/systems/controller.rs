use bevy::prelude::*;

use crate::components::{AircraftState, AirframeProfile, CommandedAttitude};
use crate::resources::{ControllerCommands, SimulationClock};

/// Turns the current controller flags into commanded targets.
pub fn command_system(
    mut query: Query<(&mut CommandedAttitude, &AircraftState, &AirframeProfile)>,
    commands: Res<ControllerCommands>,
    clock: Res<SimulationClock>,
) {
    let elapsed_ms = clock.last_increment_ms();

    for (mut commanded, state, profile) in query.iter_mut() {
        commanded.update_from_controller_commands(elapsed_ms, &commands, state, profile);
    }
}
