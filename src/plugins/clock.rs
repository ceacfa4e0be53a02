use bevy::prelude::*;

use crate::plugins::FlightSet;
use crate::resources::{
    ClockConfig, ControllerCommands, FlightSnapshot, SimulationClock, SimulationToggle, TickDriver,
    TickInput, TickSource,
};
use crate::systems::{clock_increment_system, clock_toggle_system, sample_frame_time_system};

pub struct ClockPlugin {
    clock: SimulationClock,
    driver: TickDriver,
}

impl ClockPlugin {
    pub fn from_config(config: &ClockConfig, source: TickSource) -> Self {
        let clock = match config.start_time {
            Some(start_time) => SimulationClock::with_start_time(start_time),
            None => SimulationClock::new(),
        };
        Self {
            clock,
            driver: config.tick_driver(source),
        }
    }
}

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.clock.clone())
            .insert_resource(self.driver)
            .init_resource::<TickInput>()
            .init_resource::<ControllerCommands>()
            .init_resource::<FlightSnapshot>()
            .add_event::<SimulationToggle>()
            .add_systems(Update, sample_frame_time_system.in_set(FlightSet::Input))
            .add_systems(
                Update,
                (clock_toggle_system, clock_increment_system)
                    .chain()
                    .in_set(FlightSet::Clock),
            );
    }
}
