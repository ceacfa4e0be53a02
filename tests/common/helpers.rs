use chrono::{DateTime, TimeZone, Utc};

use flyer_uav::{
    components::{AirframeType, StartConfig},
    resources::{ControllerCommands, EnvironmentConfig},
};

use crate::common::{TestApp, TestAppBuilder};

/// Fixed wall-clock time used for every toggle in tests.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

/// Straight and level at the given speed and altitude, heading north.
pub fn create_test_start(keas: f64, altitude: f64) -> StartConfig {
    StartConfig {
        keas,
        altitude,
        ..Default::default()
    }
}

/// Wind from the west in knots.
pub fn westerly(speed: f64) -> EnvironmentConfig {
    EnvironmentConfig::with_constant_wind(speed, 270.0)
}

/// An MQ-9, whose ceiling allows starts high enough to exercise the density model.
pub fn create_mq9_app(start: StartConfig, environment: EnvironmentConfig) -> TestApp {
    TestAppBuilder::new()
        .with_airframe(AirframeType::Mq9)
        .with_start(start)
        .with_environment(environment)
        .build()
}

pub fn roll_right() -> ControllerCommands {
    ControllerCommands {
        roll_right: true,
        ..Default::default()
    }
}

pub fn roll_left() -> ControllerCommands {
    ControllerCommands {
        roll_left: true,
        ..Default::default()
    }
}

pub fn pitch_down() -> ControllerCommands {
    ControllerCommands {
        pitch_down: true,
        ..Default::default()
    }
}

/// Runs until `condition` holds or `max_ticks` have elapsed.
pub fn wait_for_condition<F>(test_app: &mut TestApp, condition: F, max_ticks: usize) -> bool
where
    F: Fn(&mut TestApp) -> bool,
{
    for _ in 0..max_ticks {
        if condition(test_app) {
            return true;
        }
        test_app.tick();
    }
    condition(test_app)
}
