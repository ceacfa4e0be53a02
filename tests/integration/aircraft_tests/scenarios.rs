use approx::assert_relative_eq;
use flyer_uav::{
    components::{AirframeProfile, StartConfig, TurnRadius},
    resources::{ControllerCommands, EnvironmentConfig},
};

use crate::common::{
    assert_state_within_envelope, create_mq9_app, create_test_start, pitch_down,
    roll_left, roll_right, wait_for_condition, westerly,
};

#[test]
fn test_true_airspeed_and_mach_at_altitude() {
    let mut app =
        create_mq9_app(create_test_start(120.0, 20_000.0), EnvironmentConfig::default());

    let snapshot = app.snapshot().aircraft.unwrap();
    assert_relative_eq!(snapshot.ktas, 164.0, epsilon = 0.5);
    assert_relative_eq!(snapshot.mach, 0.27, epsilon = 1e-9);
    assert_eq!(app.aircraft_state().performance().true_airspeed.value(), 164.0);
}

#[test]
fn test_crosswind_ground_speed_and_course() {
    let app = create_mq9_app(create_test_start(120.0, 20_000.0), westerly(30.0));

    let snapshot = app.snapshot().aircraft.unwrap();
    assert_relative_eq!(snapshot.ground_speed, 167.0, epsilon = 0.5);
    assert_relative_eq!(snapshot.course, 10.0, epsilon = 0.5);
    assert_eq!(snapshot.heading, 360.0);
}

#[test]
fn test_thirty_degree_turn() {
    let start = StartConfig {
        bank: 30.0,
        ..create_test_start(120.0, 20_000.0)
    };
    let app = create_mq9_app(start, EnvironmentConfig::default());

    let snapshot = app.snapshot().aircraft.unwrap();
    assert_relative_eq!(snapshot.load_factor, 1.15, epsilon = 1e-9);
    assert_relative_eq!(snapshot.turn_rate, 3.8, epsilon = 0.5);
    match snapshot.turn_radius {
        TurnRadius::Finite(radius) => assert_relative_eq!(radius.value(), 4_130.0, epsilon = 5.0),
        TurnRadius::Infinite => panic!("banked aircraft reported an infinite turn radius"),
    }
}

#[test]
fn test_descent_vertical_speed() {
    let start = StartConfig {
        pitch: -3.0,
        ..create_test_start(120.0, 20_000.0)
    };
    let app = create_mq9_app(start, westerly(30.0));

    let snapshot = app.snapshot().aircraft.unwrap();
    assert_eq!(snapshot.ground_speed, 167.0);
    assert_relative_eq!(snapshot.vertical_speed, -885.0, epsilon = 0.5);
}

#[test]
fn test_wings_level_reports_infinite_radius() {
    let app =
        create_mq9_app(create_test_start(120.0, 20_000.0), EnvironmentConfig::default());

    let snapshot = app.snapshot().aircraft.unwrap();
    assert_eq!(snapshot.turn_radius, TurnRadius::Infinite);
    assert_eq!(snapshot.load_factor, 1.0);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["turn_radius"], "Infinite");
}

#[test]
fn test_descent_loses_altitude_over_time() {
    let start = StartConfig {
        pitch: -3.0,
        ..create_test_start(120.0, 20_000.0)
    };
    let mut app = create_mq9_app(start, westerly(30.0));
    app.arm();
    app.run_ticks(599);

    // One minute starting at -885 ft/min; the descent slows as the air thickens.
    let altitude = app.aircraft_state().altitude().value();
    assert!(
        altitude > 20_000.0 - 890.0 && altitude < 20_000.0 - 860.0,
        "altitude {} after one minute",
        altitude
    );
}

#[test]
fn test_envelope_holds_through_scripted_flight() {
    let profile = AirframeProfile::mq9();
    let mut app = create_mq9_app(create_test_start(120.0, 20_000.0), westerly(25.0));
    app.tick_ms = 200.0;
    app.arm();

    let script = [
        roll_right(),
        ControllerCommands {
            roll_right: true,
            pitch_up: true,
            ..Default::default()
        },
        roll_left(),
        pitch_down(),
        ControllerCommands {
            throttle_up: true,
            pitch_up: true,
            ..Default::default()
        },
        ControllerCommands::none(),
    ];

    for commands in script {
        app.set_commands(commands);
        for _ in 0..75 {
            app.tick();
            let state = app.aircraft_state();
            assert_state_within_envelope(&state, &profile);
        }
    }
}

#[test]
fn test_reaches_commanded_bank_and_holds() {
    let mut app =
        create_mq9_app(create_test_start(120.0, 20_000.0), EnvironmentConfig::default());
    app.set_commands(roll_right());
    app.arm();

    let reached = wait_for_condition(
        &mut app,
        |app| app.aircraft_state().bank().value() >= 45.0,
        200,
    );
    assert!(reached);

    app.run_ticks(20);
    assert_eq!(app.aircraft_state().bank().value(), 45.0);
}
