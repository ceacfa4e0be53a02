use bevy::prelude::*;

use crate::components::AircraftState;
use crate::resources::Environment;

/// Recomputes derived readouts from the freshly advanced attitude.
pub fn performance_system(
    mut query: Query<&mut AircraftState>,
    environment: Option<Res<Environment>>,
) {
    // A missing environment means calm air on a standard day.
    let environment = environment.map(|env| *env).unwrap_or_default();

    for mut state in query.iter_mut() {
        state.update_performance_values(&environment);
    }
}
