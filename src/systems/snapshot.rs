use bevy::prelude::*;

use crate::components::{AircraftIdentity, AircraftSnapshot, AircraftState, CommandedAttitude};
use crate::resources::{FlightSnapshot, SimulationClock};

/// Publishes read-only copies of the aircraft and clock for displays.
pub fn publish_snapshot_system(
    mut query: Query<(
        &AircraftIdentity,
        &AircraftState,
        &CommandedAttitude,
        &mut AircraftSnapshot,
    )>,
    clock: Res<SimulationClock>,
    mut flight: ResMut<FlightSnapshot>,
) {
    let mut published = None;
    for (identity, state, commanded, mut snapshot) in query.iter_mut() {
        *snapshot = AircraftSnapshot::capture(identity, state, commanded);
        published = Some(snapshot.clone());
    }

    *flight = FlightSnapshot {
        aircraft: published,
        clock_state: clock.state(),
        duration: clock.format_duration(),
        current_time: clock.current_time(),
    };
}
