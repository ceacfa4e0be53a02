use flyer_uav::components::{AircraftSnapshot, AircraftState, AirframeProfile};

/// Assert that a bearing lies in (0, 360]
#[track_caller]
pub fn assert_bearing_valid(degrees: f64) {
    assert!(
        degrees > 0.0 && degrees <= 360.0,
        "bearing {} outside (0, 360]",
        degrees
    );
}

/// Assert that the aircraft is inside its airframe's envelope and its
/// readouts are well defined
#[track_caller]
pub fn assert_state_within_envelope(state: &AircraftState, profile: &AirframeProfile) {
    assert!(
        state.bank().abs() <= profile.bank_limit(),
        "bank {} exceeds limit {}",
        state.bank(),
        profile.bank_limit()
    );
    assert!(
        state.pitch().abs() <= profile.pitch_limit(),
        "pitch {} exceeds limit {}",
        state.pitch(),
        profile.pitch_limit()
    );
    assert!(state.altitude().value() >= 0.0, "altitude below ground");
    assert!(state.altitude() <= profile.limits().max_altitude, "altitude above ceiling");
    assert!(state.equivalent_airspeed().value() >= 0.0, "negative airspeed");

    assert_bearing_valid(state.heading().degrees());
    let perf = state.performance();
    assert_bearing_valid(perf.course.degrees());
    assert!(perf.load_factor >= 1.0, "load factor {} below 1", perf.load_factor);
    assert!(perf.turn_rate.is_finite(), "turn rate not finite");
    assert!(perf.vertical_speed.is_finite(), "vertical speed not finite");
    if let Some(radius) = perf.turn_radius.feet() {
        assert!(radius.is_finite(), "turn radius not finite");
    }
}

/// Assert that a published snapshot matches the live state
#[track_caller]
pub fn assert_snapshot_matches(snapshot: &AircraftSnapshot, state: &AircraftState) {
    assert_eq!(snapshot.bank, state.bank().value());
    assert_eq!(snapshot.pitch, state.pitch().value());
    assert_eq!(snapshot.heading, state.heading().degrees());
    assert_eq!(snapshot.altitude, state.altitude().value());
    assert_eq!(snapshot.keas, state.equivalent_airspeed().value());
    assert_eq!(snapshot.ktas, state.performance().true_airspeed.value());
    assert_eq!(snapshot.turn_radius, state.performance().turn_radius);
}
