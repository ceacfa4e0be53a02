use approx::assert_relative_eq;
use flyer_uav::{
    components::{
        AircraftIdentity, AircraftSnapshot, AircraftState, AirframeProfile, AirframeType,
        CommandedAttitude, StartConfig, TurnRadius,
    },
    resources::{ClockState, ControllerCommands, Environment, Wind},
    units::{Bearing, Knots, Temperature},
};

use crate::common::{
    assert_snapshot_matches, assert_state_within_envelope, roll_left, roll_right, westerly,
    TestAppBuilder,
};

#[test]
fn test_startup_spawns_aircraft_with_readouts() {
    let mut app = TestAppBuilder::new().build();

    assert_eq!(app.query_all::<AircraftState>().len(), 1);
    let identity = app.query_single::<AircraftIdentity>().cloned().unwrap();
    assert_eq!(identity.name(), "Generic UAV");

    let state = app.aircraft_state();
    assert_eq!(state.performance().true_airspeed, Knots::new(139.0));
    assert!(state.performance().turn_radius.is_infinite());

    let snapshot = app.snapshot();
    assert_eq!(snapshot.clock_state, ClockState::Unarmed);
    assert_eq!(snapshot.duration, "00:00:00");
    assert_eq!(snapshot.current_time, None);
    assert_snapshot_matches(snapshot.aircraft.as_ref().unwrap(), &state);
}

#[test]
fn test_unarmed_clock_freezes_aircraft() {
    let mut app = TestAppBuilder::new().build();
    let before = app.aircraft_state();

    app.set_commands(roll_right());
    app.run_ticks(10);

    assert_eq!(app.aircraft_state(), before);
    assert_eq!(
        app.query_single::<CommandedAttitude>().copied().unwrap(),
        CommandedAttitude::default()
    );
}

#[test]
fn test_roll_is_rate_limited() {
    let mut app = TestAppBuilder::new().with_tick_ms(100.0).build();
    app.set_commands(roll_right());
    app.arm();
    app.run_ticks(9);

    // Generic airframe rolls at 10 deg/s; ten ticks of 100 ms.
    let state = app.aircraft_state();
    assert_relative_eq!(state.bank().value(), 10.0, epsilon = 1e-9);
    assert!(state.performance().turn_rate > 0.0);

    // Releasing the stick holds the bank.
    app.set_commands(ControllerCommands::none());
    app.run_ticks(5);
    assert_relative_eq!(app.aircraft_state().bank().value(), 10.0, epsilon = 1e-9);
}

#[test]
fn test_mq9_rolls_slower() {
    let mut app = TestAppBuilder::new()
        .with_airframe(AirframeType::Mq9)
        .with_tick_ms(100.0)
        .build();
    app.set_commands(roll_left());
    app.arm();
    app.run_ticks(9);

    assert_relative_eq!(app.aircraft_state().bank().value(), -6.0, epsilon = 1e-9);
}

#[test]
fn test_bank_saturates_at_limit() {
    let mut app = TestAppBuilder::new().with_tick_ms(250.0).build();
    app.set_commands(roll_right());
    app.arm();
    app.run_ticks(60);

    let state = app.aircraft_state();
    assert_eq!(state.bank().value(), 60.0);
    assert_state_within_envelope(&state, &AirframeProfile::generic());
}

#[test]
fn test_sustained_turn_changes_heading() {
    let mut app = TestAppBuilder::new()
        .with_start(StartConfig {
            bank: 30.0,
            ..Default::default()
        })
        .with_tick_ms(100.0)
        .build();
    let turn_rate = app.aircraft_state().performance().turn_rate;

    app.arm();
    app.run_ticks(19);

    let heading = app.aircraft_state().heading().degrees();
    assert_relative_eq!(heading, turn_rate * 2.0, epsilon = 1e-6);
}

#[test]
fn test_environment_update_applies_next_tick() {
    let mut app = TestAppBuilder::new().build();
    app.arm();
    let still_air = app.aircraft_state().performance().ground_speed;

    let wind = Wind::new(Bearing::new(360.0), Knots::new(40.0)).unwrap();
    app.update_environment(Environment::new(
        wind,
        Temperature::standard_day_at_sea_level(),
    ));
    app.tick();

    let headwind = app.aircraft_state().performance().ground_speed;
    assert_eq!(headwind, still_air - Knots::new(40.0));
}

#[test]
fn test_missing_environment_falls_back_to_calm_standard_day() {
    let mut app = TestAppBuilder::new()
        .with_environment(westerly(30.0))
        .build();
    let drifting = app.snapshot().aircraft.unwrap();
    assert_ne!(drifting.ground_speed, drifting.ktas);

    app.app.world_mut().remove_resource::<Environment>();
    app.arm();

    let snapshot = app.snapshot().aircraft.unwrap();
    assert_eq!(snapshot.ground_speed, snapshot.ktas);
    assert_eq!(snapshot.course, snapshot.heading);
    assert_eq!(snapshot.ktas, 139.0);

    let state = app.aircraft_state();
    let expected_oat = Environment::default().temperature_at_altitude(state.altitude());
    assert_eq!(state.performance().outside_air_temperature, expected_oat);
}

#[test]
fn test_snapshot_component_tracks_state() {
    let mut app = TestAppBuilder::new().build();
    app.set_commands(roll_right());
    app.arm();
    app.run_ticks(3);

    let state = app.aircraft_state();
    let snapshot = app.query_single::<AircraftSnapshot>().cloned().unwrap();
    assert_snapshot_matches(&snapshot, &state);
    assert!(snapshot.commanded_bank.is_some());
    assert_eq!(snapshot.commanded_pitch, None);
    assert_ne!(snapshot.turn_radius, TurnRadius::Infinite);

    let published = app.snapshot().aircraft.unwrap();
    assert_eq!(published, snapshot);
}
