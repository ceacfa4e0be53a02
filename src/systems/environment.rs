use bevy::prelude::*;

use crate::resources::{Environment, EnvironmentUpdate};

/// Swaps in new ambient conditions. The latest update in a frame wins.
pub fn environment_update_system(
    mut updates: EventReader<EnvironmentUpdate>,
    current: Option<ResMut<Environment>>,
    mut commands: Commands,
) {
    let Some(EnvironmentUpdate(environment)) = updates.read().last().copied() else {
        return;
    };

    info!(
        "Environment replaced: wind {} at {}, surface {:.1} °C",
        environment.wind().direction_from(),
        environment.wind().speed(),
        environment.surface_temperature().celsius()
    );

    match current {
        Some(mut current) => *current = environment,
        None => commands.insert_resource(environment),
    }
}
