//! Physical quantity types used throughout the flight model.
mod bearing;
mod dimensions;
mod gravity;
mod quantity;
mod temperature;

pub use bearing::Bearing;
pub use dimensions::*;
pub use gravity::{
    gravity_at_altitude, gravity_at_altitude_fps2, gravity_at_altitude_in, gravity_at_sea_level,
};
pub use quantity::{Quantity, Unit};
pub use temperature::{Temperature, TemperatureUnit};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Unsupported units: {0}")]
    Unsupported(String),
}
