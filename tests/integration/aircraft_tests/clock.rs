use chrono::{TimeDelta, TimeZone, Utc};
use pretty_assertions::assert_eq;
use std::time::Duration;

use flyer_uav::resources::{ClockConfig, ClockState, TickDriver, TickSource};

use crate::common::{epoch, roll_right, TestAppBuilder};

#[test]
fn test_toggle_pause_resume_durations() {
    let mut app = TestAppBuilder::new().build();

    app.toggle();
    app.tick_ms(1_000.0);
    assert_eq!(app.snapshot().duration, "00:00:01");
    assert_eq!(app.snapshot().clock_state, ClockState::Running);

    app.toggle();
    app.tick_ms(500.0);
    assert_eq!(app.snapshot().duration, "00:00:01");
    assert_eq!(app.snapshot().clock_state, ClockState::Paused);

    app.toggle();
    app.tick_ms(500.0);
    assert_eq!(app.snapshot().duration, "00:00:01");
    assert_eq!(app.clock().duration_ms(), 1_500.0);
}

#[test]
fn test_pause_freezes_flight_state() {
    let mut app = TestAppBuilder::new().build();
    app.set_commands(roll_right());
    app.arm();
    app.run_ticks(4);

    app.toggle();
    app.tick();
    let paused = app.aircraft_state();
    app.run_ticks(10);
    assert_eq!(app.aircraft_state(), paused);

    // Resuming continues from where it stopped.
    app.toggle();
    app.tick();
    assert!(app.aircraft_state().bank() > paused.bank());
}

#[test]
fn test_current_time_follows_toggle_time() {
    let mut app = TestAppBuilder::new().build();
    app.arm();
    app.run_ticks(9);

    let snapshot = app.snapshot();
    assert_eq!(snapshot.current_time, Some(epoch() + TimeDelta::seconds(1)));
}

#[test]
fn test_preset_start_time() {
    let preset = Utc.with_ymd_and_hms(2030, 7, 4, 6, 0, 0).unwrap();
    let mut app = TestAppBuilder::new()
        .with_clock(ClockConfig {
            start_time: Some(preset),
            ..Default::default()
        })
        .build();

    app.arm();
    assert_eq!(app.clock().start_time(), Some(preset));
    assert_eq!(
        app.snapshot().current_time,
        Some(preset + TimeDelta::milliseconds(100))
    );
}

#[test]
fn test_negative_tick_ignored() {
    let mut app = TestAppBuilder::new().build();
    app.arm();
    let before = app.aircraft_state();

    app.tick_ms(-40.0);
    assert_eq!(app.clock().duration_ms(), 100.0);
    assert_eq!(app.clock().last_increment_ms(), 0.0);
    assert_eq!(app.aircraft_state(), before);
}

#[test]
fn test_bevy_time_driver_clamps_long_frames() {
    let mut app = TestAppBuilder::new()
        .with_clock(ClockConfig {
            max_frame_ms: 100.0,
            ..Default::default()
        })
        .with_tick_source(TickSource::BevyTime)
        .with_frame_time(Duration::from_millis(400))
        .build();

    app.toggle();
    app.run_frame();
    app.run_frame();

    assert_eq!(
        app.get_state::<TickDriver>(),
        Some(&TickDriver::BevyTime { max_frame_ms: 100.0 })
    );
    let clock = app.clock();
    assert_eq!(clock.last_increment_ms(), 100.0);
    assert!(clock.duration_ms() > 0.0 && clock.duration_ms() <= 200.0);
}
