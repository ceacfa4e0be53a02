use std::fmt;

use bevy::prelude::*;
use nalgebra::Vector2;
use serde::Serialize;

use crate::components::aircraft::config::StartConfig;
use crate::components::aircraft::status::{BoardsStatus, ControlMode, GearStatus};
use crate::resources::Environment;
use crate::units::{
    gravity_at_altitude, Bearing, Degrees, Feet, FeetPerMinute, FeetPerSecond, Knots,
    MetersPerSecondSquared, Temperature,
};
use crate::utils::{
    clamp_symmetric, round_to, LEVEL_BANK_THRESHOLD, MAX_COMPUTABLE_BANK, MIN_AIRSPEED_THRESHOLD,
    SEA_LEVEL_DENSITY,
};

/// Radius of the circle flown at the current bank and speed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum TurnRadius {
    Finite(Feet),
    /// Wings level.
    #[default]
    Infinite,
}

impl TurnRadius {
    pub fn is_infinite(&self) -> bool {
        matches!(self, TurnRadius::Infinite)
    }

    pub fn feet(&self) -> Option<f64> {
        match self {
            TurnRadius::Finite(radius) => Some(radius.value()),
            TurnRadius::Infinite => None,
        }
    }
}

impl fmt::Display for TurnRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRadius::Finite(radius) => write!(f, "{:.0} ft", radius.value()),
            TurnRadius::Infinite => write!(f, "∞"),
        }
    }
}

/// Readouts derived from attitude, position and environment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PerformanceValues {
    pub true_airspeed: Knots,
    pub mach: f64,
    pub ground_speed: Knots,
    pub course: Bearing,
    pub load_factor: f64,
    /// Degrees per second, positive turning right.
    pub turn_rate: f64,
    pub turn_radius: TurnRadius,
    pub vertical_speed: FeetPerMinute,
    pub gravity: MetersPerSecondSquared,
    pub outside_air_temperature: Temperature,
}

/// Current attitude and position of the aircraft.
///
/// Attitude and position only change through the estimator; everything in
/// [`PerformanceValues`] is recomputed by [`AircraftState::update_performance_values`].
#[derive(Component, Debug, Clone, PartialEq)]
pub struct AircraftState {
    bank: Degrees,
    pitch: Degrees,
    heading: Bearing,
    equivalent_airspeed: Knots,
    altitude: Feet,
    /// (east, north) in feet from the start point.
    position: Vector2<f64>,
    control_mode: ControlMode,
    gear: GearStatus,
    boards: BoardsStatus,
    performance: PerformanceValues,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::from_start(&StartConfig::default())
    }
}

impl AircraftState {
    /// Builds the initial state. Derived values stay at their defaults until
    /// the first call to [`AircraftState::update_performance_values`].
    pub fn from_start(start: &StartConfig) -> Self {
        Self {
            bank: Degrees::new(start.bank),
            pitch: Degrees::new(start.pitch),
            heading: Bearing::new(start.heading),
            equivalent_airspeed: Knots::new(start.keas.max(0.0)),
            altitude: Feet::new(start.altitude),
            position: start.position,
            control_mode: start.control_mode,
            gear: start.gear,
            boards: start.boards,
            performance: PerformanceValues::default(),
        }
    }

    pub fn bank(&self) -> Degrees {
        self.bank
    }

    pub fn pitch(&self) -> Degrees {
        self.pitch
    }

    pub fn heading(&self) -> Bearing {
        self.heading
    }

    pub fn equivalent_airspeed(&self) -> Knots {
        self.equivalent_airspeed
    }

    pub fn altitude(&self) -> Feet {
        self.altitude
    }

    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    pub fn control_mode(&self) -> ControlMode {
        self.control_mode
    }

    pub fn gear(&self) -> GearStatus {
        self.gear
    }

    pub fn boards(&self) -> BoardsStatus {
        self.boards
    }

    pub fn performance(&self) -> &PerformanceValues {
        &self.performance
    }

    pub fn set_control_mode(&mut self, mode: ControlMode) {
        self.control_mode = mode;
    }

    pub fn set_gear(&mut self, gear: GearStatus) {
        self.gear = gear;
    }

    pub fn set_boards(&mut self, boards: BoardsStatus) {
        self.boards = boards;
    }

    pub(crate) fn set_bank(&mut self, bank: Degrees) {
        self.bank = bank;
    }

    pub(crate) fn set_pitch(&mut self, pitch: Degrees) {
        self.pitch = pitch;
    }

    pub(crate) fn set_heading(&mut self, heading: Bearing) {
        self.heading = heading;
    }

    pub(crate) fn set_equivalent_airspeed(&mut self, keas: Knots) {
        self.equivalent_airspeed = keas;
    }

    pub(crate) fn set_altitude(&mut self, altitude: Feet) {
        self.altitude = altitude;
    }

    pub(crate) fn set_position(&mut self, position: Vector2<f64>) {
        self.position = position;
    }

    /// Recomputes every derived readout from the current attitude and
    /// `environment`. Never fails: degenerate attitudes map to limit values.
    pub fn update_performance_values(&mut self, environment: &Environment) {
        let altitude = self.altitude;

        let density = environment.air_density(altitude);
        let true_airspeed = Knots::new(
            (self.equivalent_airspeed.value() * (SEA_LEVEL_DENSITY / density).sqrt()).round(),
        );

        let mach = round_to(
            true_airspeed.value() / environment.speed_of_sound(altitude).value(),
            2,
        );

        let (ground_speed, course) = ground_track(true_airspeed, self.heading, environment);

        let bank = clamp_symmetric(self.bank.value(), MAX_COMPUTABLE_BANK);
        let bank_rad = Degrees::new(bank).radians();
        let load_factor = round_to(1.0 / bank_rad.cos(), 2);

        let gravity = gravity_at_altitude(altitude);
        let tas_fps: FeetPerSecond = true_airspeed.convert();

        let turn_rate = if true_airspeed.meters_per_second() < MIN_AIRSPEED_THRESHOLD {
            0.0
        } else {
            let rate = gravity.meters_per_second_squared() * bank_rad.tan()
                / true_airspeed.meters_per_second();
            round_to(rate.to_degrees(), 2)
        };

        let turn_radius = if bank.abs() < LEVEL_BANK_THRESHOLD {
            TurnRadius::Infinite
        } else if true_airspeed.meters_per_second() < MIN_AIRSPEED_THRESHOLD {
            TurnRadius::Finite(Feet::ZERO)
        } else {
            // tan|bank| is sqrt(n^2 - 1) without the rounding applied to n.
            // The rounded n gives ~4,201 ft at 30 deg and 164 KTAS instead of ~4,130 ft.
            let radius =
                tas_fps.value().powi(2) / (gravity.feet_per_second_squared() * bank_rad.tan().abs());
            TurnRadius::Finite(Feet::new(round_to(radius, 4)))
        };

        let vertical_speed = FeetPerMinute::new(round_to(
            ground_speed.feet_per_second() * 60.0 * self.pitch.radians().sin(),
            2,
        ));

        self.performance = PerformanceValues {
            true_airspeed,
            mach,
            ground_speed,
            course,
            load_factor,
            turn_rate,
            turn_radius,
            vertical_speed,
            gravity,
            outside_air_temperature: environment.temperature_at_altitude(altitude),
        };
    }
}

/// Ground speed (rounded to the knot) and course (rounded to the degree).
fn ground_track(true_airspeed: Knots, heading: Bearing, environment: &Environment) -> (Knots, Bearing) {
    let air = Vector2::new(
        true_airspeed.value() * heading.radians().cos(),
        true_airspeed.value() * heading.radians().sin(),
    );
    let ground = air + environment.wind().velocity();

    let ground_speed = Knots::new(ground.norm().round());
    let course = Bearing::from_radians(ground.y.atan2(ground.x)).round();
    (ground_speed, course)
}
