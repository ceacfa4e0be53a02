use bevy::{prelude::*, time::TimeUpdateStrategy};
use chrono::{DateTime, Utc};
use std::time::Duration;

use flyer_uav::{
    components::{AircraftConfig, AircraftState, AirframeType, StartConfig},
    plugins::add_simulation_plugins,
    resources::{
        ClockConfig, ControllerCommands, Environment, EnvironmentConfig, EnvironmentUpdate,
        FlightSnapshot, SimulationClock, SimulationConfig, SimulationToggle, TickInput, TickSource,
    },
};

use crate::common::epoch;

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: SimulationConfig,
    source: TickSource,
    tick_ms: f64,
    frame_time: Option<Duration>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            source: TickSource::Manual,
            tick_ms: 100.0,
            frame_time: None,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_airframe(mut self, airframe_type: AirframeType) -> Self {
        self.config.aircraft = AircraftConfig::programmed(airframe_type);
        self
    }

    pub fn with_aircraft(mut self, aircraft: AircraftConfig) -> Self {
        self.config.aircraft = aircraft;
        self
    }

    pub fn with_start(mut self, start: StartConfig) -> Self {
        self.config.start = start;
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentConfig) -> Self {
        self.config.environment = environment;
        self
    }

    pub fn with_clock(mut self, clock: ClockConfig) -> Self {
        self.config.clock = clock;
        self
    }

    pub fn with_tick_source(mut self, source: TickSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_tick_ms(mut self, tick_ms: f64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Advance Bevy's clock by a fixed amount every frame.
    pub fn with_frame_time(mut self, frame_time: Duration) -> Self {
        self.frame_time = Some(frame_time);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        if let Some(frame_time) = self.frame_time {
            app.insert_resource(TimeUpdateStrategy::ManualDuration(frame_time));
        }

        add_simulation_plugins(&mut app, &self.config, self.source)
            .expect("test configuration should be valid");

        // Run startup so the aircraft exists and has a first snapshot
        app.update();

        TestApp {
            app,
            tick_ms: self.tick_ms,
        }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
    pub tick_ms: f64,
}

impl TestApp {
    /// Queues a start/pause edge, applied on the next tick.
    pub fn toggle(&mut self) {
        self.toggle_at(epoch());
    }

    pub fn toggle_at(&mut self, at: DateTime<Utc>) {
        self.app.world_mut().send_event(SimulationToggle { at });
    }

    /// Toggles and runs one tick, leaving the clock running.
    pub fn arm(&mut self) {
        self.toggle();
        self.tick();
    }

    pub fn set_commands(&mut self, commands: ControllerCommands) {
        self.app.insert_resource(commands);
    }

    pub fn update_environment(&mut self, environment: Environment) {
        self.app
            .world_mut()
            .send_event(EnvironmentUpdate(environment));
    }

    pub fn tick(&mut self) {
        let tick_ms = self.tick_ms;
        self.tick_ms(tick_ms);
    }

    pub fn tick_ms(&mut self, elapsed_ms: f64) {
        self.app.insert_resource(TickInput::new(elapsed_ms));
        self.app.update();
    }

    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn clock(&self) -> SimulationClock {
        self.get_state::<SimulationClock>()
            .cloned()
            .expect("clock resource should exist")
    }

    pub fn snapshot(&self) -> FlightSnapshot {
        self.get_state::<FlightSnapshot>()
            .cloned()
            .expect("flight snapshot resource should exist")
    }

    pub fn aircraft_state(&mut self) -> AircraftState {
        self.query_single::<AircraftState>()
            .cloned()
            .expect("exactly one aircraft should exist")
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }
}
