use bevy::prelude::*;

use crate::components::aircraft::{
    AircraftConfig, AircraftIdentity, AircraftSnapshot, AircraftState, AirframeProfile,
    CommandedAttitude, ConfigError, StartConfig,
};
use crate::plugins::{
    ClockPlugin, EnvironmentPlugin, FlightSchedulePlugin, FlightSet, StartupStage,
};
use crate::resources::{SimulationConfig, TickSource};
use crate::systems::{
    command_system, estimator_system, performance_system, publish_snapshot_system,
};

/// Spawns the aircraft and wires the per-tick flight systems.
pub struct AircraftPlugin {
    config: AircraftConfig,
    profile: AirframeProfile,
    start: StartConfig,
}

impl AircraftPlugin {
    /// Fails if the start point lies outside the airframe's envelope.
    pub fn new(
        config: AircraftConfig,
        profile: AirframeProfile,
        start: StartConfig,
    ) -> Result<Self, ConfigError> {
        start.validate(&profile)?;
        Ok(Self {
            config,
            profile,
            start,
        })
    }

    fn setup_aircraft(
        mut commands: Commands,
        config: AircraftConfig,
        profile: AirframeProfile,
        start: StartConfig,
    ) {
        info!(
            "Spawning {} ({}) at {} ft, heading {}, {} KEAS",
            config.name, config.tail_number, start.altitude, start.heading, start.keas
        );
        commands.spawn((
            AircraftIdentity::new(config.name.clone(), config.tail_number.clone()),
            AircraftState::from_start(&start),
            CommandedAttitude::default(),
            AircraftSnapshot::default(),
            profile,
            Name::new(config.name),
        ));
    }
}

impl Plugin for AircraftPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        let profile = self.profile.clone();
        let start = self.start.clone();

        app.add_systems(
            Startup,
            (move |commands: Commands| {
                Self::setup_aircraft(commands, config.clone(), profile.clone(), start.clone())
            })
            .in_set(StartupStage::BuildAircraft),
        )
        .add_systems(
            Startup,
            (performance_system, publish_snapshot_system)
                .chain()
                .in_set(StartupStage::Initialise),
        )
        .add_systems(
            Update,
            (
                command_system.in_set(FlightSet::Command),
                estimator_system.in_set(FlightSet::Estimate),
                performance_system.in_set(FlightSet::Performance),
                publish_snapshot_system.in_set(FlightSet::Publish),
            ),
        );
    }
}

/// Validates `config` and adds everything needed to fly it.
pub fn add_simulation_plugins(
    app: &mut App,
    config: &SimulationConfig,
    source: TickSource,
) -> Result<(), ConfigError> {
    let resolved = config.resolve()?;

    app.add_plugins((
        FlightSchedulePlugin,
        EnvironmentPlugin::with_environment(resolved.environment),
        ClockPlugin::from_config(&resolved.clock, source),
        AircraftPlugin::new(resolved.aircraft, resolved.profile, resolved.start)?,
    ))
    .insert_resource(config.clone());

    Ok(())
}
