use bevy::prelude::*;

use crate::plugins::{FlightSet, StartupStage};
use crate::resources::{Environment, EnvironmentUpdate};
use crate::systems::environment_update_system;

pub struct EnvironmentPlugin {
    pub environment: Option<Environment>,
}

impl EnvironmentPlugin {
    /// Calm air on a standard day.
    pub fn new() -> Self {
        Self { environment: None }
    }

    pub fn with_environment(environment: Environment) -> Self {
        Self {
            environment: Some(environment),
        }
    }

    fn setup_environment(mut commands: Commands, environment: Option<Environment>) {
        let environment = environment.unwrap_or_default();
        info!(
            "Environment: wind {} at {}, surface {:.1} °C",
            environment.wind().direction_from(),
            environment.wind().speed(),
            environment.surface_temperature().celsius()
        );
        commands.insert_resource(environment);
    }

    fn setup_environment_with_initial(
        environment: Option<Environment>,
    ) -> impl FnMut(Commands) + Send + Sync + 'static {
        move |commands: Commands| {
            Self::setup_environment(commands, environment);
        }
    }
}

impl Default for EnvironmentPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<EnvironmentUpdate>()
            .add_systems(
                Startup,
                Self::setup_environment_with_initial(self.environment)
                    .in_set(StartupStage::BuildEnvironment),
            )
            .add_systems(Update, environment_update_system.in_set(FlightSet::Input));
    }
}
