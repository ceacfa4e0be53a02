use bevy::prelude::*;
use serde::Serialize;

use crate::components::aircraft::commanded::CommandedAttitude;
use crate::components::aircraft::identity::AircraftIdentity;
use crate::components::aircraft::state::{AircraftState, TurnRadius};
use crate::components::aircraft::status::{BoardsStatus, ControlMode, GearStatus};

/// Read-only copy of everything a display needs, taken after the
/// performance pass each tick.
#[derive(Component, Debug, Clone, PartialEq, Default, Serialize)]
pub struct AircraftSnapshot {
    pub name: String,
    pub tail_number: String,
    /// Degrees, positive right wing down.
    pub bank: f64,
    /// Flight-path angle in degrees.
    pub pitch: f64,
    pub heading: f64,
    pub course: f64,
    pub keas: f64,
    pub ktas: f64,
    pub mach: f64,
    /// Feet.
    pub altitude: f64,
    /// Knots.
    pub ground_speed: f64,
    pub load_factor: f64,
    /// Degrees per second.
    pub turn_rate: f64,
    pub turn_radius: TurnRadius,
    /// Feet per minute.
    pub vertical_speed: f64,
    /// (east, north) in feet.
    pub position: [f64; 2],
    /// Experienced gravity, m/s².
    pub gravity: f64,
    /// Outside air temperature, °C.
    pub outside_air_temperature: f64,
    pub control_mode: ControlMode,
    pub gear: GearStatus,
    pub boards: BoardsStatus,
    pub commanded_bank: Option<f64>,
    pub commanded_pitch: Option<f64>,
    pub commanded_speed: Option<f64>,
}

impl AircraftSnapshot {
    pub fn capture(
        identity: &AircraftIdentity,
        state: &AircraftState,
        commanded: &CommandedAttitude,
    ) -> Self {
        let perf = state.performance();
        let position = state.position();
        Self {
            name: identity.name().to_string(),
            tail_number: identity.tail_number().to_string(),
            bank: state.bank().value(),
            pitch: state.pitch().value(),
            heading: state.heading().degrees(),
            course: perf.course.degrees(),
            keas: state.equivalent_airspeed().value(),
            ktas: perf.true_airspeed.value(),
            mach: perf.mach,
            altitude: state.altitude().value(),
            ground_speed: perf.ground_speed.value(),
            load_factor: perf.load_factor,
            turn_rate: perf.turn_rate,
            turn_radius: perf.turn_radius,
            vertical_speed: perf.vertical_speed.value(),
            position: [position.x, position.y],
            gravity: perf.gravity.value(),
            outside_air_temperature: perf.outside_air_temperature.celsius(),
            control_mode: state.control_mode(),
            gear: state.gear(),
            boards: state.boards(),
            commanded_bank: commanded.bank.target().map(|bank| bank.value()),
            commanded_pitch: commanded.pitch.target().map(|pitch| pitch.value()),
            commanded_speed: commanded.speed.target().map(|speed| speed.value()),
        }
    }
}
