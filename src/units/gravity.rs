use super::{AccelerationUnit, Feet, FeetPerSecondSquared, Meters, MetersPerSecondSquared};
use crate::utils::{GRAVITY, MEAN_EARTH_RADIUS};

/// Standard gravity at sea level.
pub fn gravity_at_sea_level() -> MetersPerSecondSquared {
    MetersPerSecondSquared::new(GRAVITY)
}

/// Gravity at `altitude` using the inverse-square law over a spherical Earth.
pub fn gravity_at_altitude(altitude: Feet) -> MetersPerSecondSquared {
    let radius = Meters::new(MEAN_EARTH_RADIUS);
    let ratio = radius.value() / (radius.value() + altitude.meters());
    gravity_at_sea_level() * ratio.powi(2)
}

/// Same as [`gravity_at_altitude`] in feet per second squared.
pub fn gravity_at_altitude_fps2(altitude: Feet) -> FeetPerSecondSquared {
    gravity_at_altitude(altitude).convert()
}

/// Gravity at `altitude` in a unit chosen at runtime.
pub fn gravity_at_altitude_in(altitude: Feet, unit: AccelerationUnit) -> f64 {
    unit.value_of(gravity_at_altitude(altitude))
}
