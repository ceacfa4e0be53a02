use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::quantity::{Quantity, Unit};
use super::UnitError;

/// Dimension markers. Uninhabited, only ever used as type parameters.
pub enum Length {}
pub enum Speed {}
pub enum Acceleration {}
pub enum Angle {}

macro_rules! unit {
    ($(#[$meta:meta])* $name:ident, $dimension:ty, $to_base:expr, $symbol:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name;

        impl Unit for $name {
            type Dimension = $dimension;
            const TO_BASE: f64 = $to_base;
            const SYMBOL: &'static str = $symbol;
        }
    };
}

unit!(Meter, Length, 1.0, "m");
unit!(Foot, Length, 0.3048, "ft");
unit!(Kilometer, Length, 1_000.0, "km");
unit!(NauticalMile, Length, 1_852.0, "NM");

unit!(MeterPerSecond, Speed, 1.0, "m/s");
unit!(Knot, Speed, 1_852.0 / 3_600.0, "kt");
unit!(FootPerSecond, Speed, 0.3048, "ft/s");
unit!(FootPerMinute, Speed, 0.3048 / 60.0, "ft/min");
unit!(KilometerPerHour, Speed, 1_000.0 / 3_600.0, "km/h");

unit!(MeterPerSecondSquared, Acceleration, 1.0, "m/s^2");
unit!(FootPerSecondSquared, Acceleration, 0.3048, "ft/s^2");

unit!(Radian, Angle, 1.0, "rad");
unit!(Degree, Angle, std::f64::consts::PI / 180.0, "deg");

pub type Meters = Quantity<Meter>;
pub type Feet = Quantity<Foot>;
pub type Kilometers = Quantity<Kilometer>;
pub type NauticalMiles = Quantity<NauticalMile>;

pub type MetersPerSecond = Quantity<MeterPerSecond>;
pub type Knots = Quantity<Knot>;
pub type FeetPerSecond = Quantity<FootPerSecond>;
pub type FeetPerMinute = Quantity<FootPerMinute>;
pub type KilometersPerHour = Quantity<KilometerPerHour>;

pub type MetersPerSecondSquared = Quantity<MeterPerSecondSquared>;
pub type FeetPerSecondSquared = Quantity<FootPerSecondSquared>;

pub type Radians = Quantity<Radian>;
pub type Degrees = Quantity<Degree>;

impl<U: Unit<Dimension = Length>> Quantity<U> {
    pub fn meters(&self) -> f64 {
        self.convert::<Meter>().value()
    }

    pub fn feet(&self) -> f64 {
        self.convert::<Foot>().value()
    }

    pub fn kilometers(&self) -> f64 {
        self.convert::<Kilometer>().value()
    }

    pub fn nautical_miles(&self) -> f64 {
        self.convert::<NauticalMile>().value()
    }
}

impl<U: Unit<Dimension = Speed>> Quantity<U> {
    pub fn knots(&self) -> f64 {
        self.convert::<Knot>().value()
    }

    pub fn meters_per_second(&self) -> f64 {
        self.convert::<MeterPerSecond>().value()
    }

    pub fn feet_per_second(&self) -> f64 {
        self.convert::<FootPerSecond>().value()
    }

    pub fn feet_per_minute(&self) -> f64 {
        self.convert::<FootPerMinute>().value()
    }

    pub fn kilometers_per_hour(&self) -> f64 {
        self.convert::<KilometerPerHour>().value()
    }
}

impl<U: Unit<Dimension = Acceleration>> Quantity<U> {
    pub fn meters_per_second_squared(&self) -> f64 {
        self.convert::<MeterPerSecondSquared>().value()
    }

    pub fn feet_per_second_squared(&self) -> f64 {
        self.convert::<FootPerSecondSquared>().value()
    }
}

impl<U: Unit<Dimension = Angle>> Quantity<U> {
    pub fn degrees(&self) -> f64 {
        self.convert::<Degree>().value()
    }

    pub fn radians(&self) -> f64 {
        self.convert::<Radian>().value()
    }
}

impl Degrees {
    pub fn from_radians(radians: f64) -> Self {
        Radians::new(radians).convert()
    }
}

/// Speed units accepted in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
    FeetPerSecond,
    KilometersPerHour,
}

impl SpeedUnit {
    /// Builds a knots quantity from a value expressed in this unit.
    pub fn to_knots(self, value: f64) -> Knots {
        match self {
            SpeedUnit::Knots => Knots::new(value),
            SpeedUnit::MetersPerSecond => MetersPerSecond::new(value).convert(),
            SpeedUnit::FeetPerSecond => FeetPerSecond::new(value).convert(),
            SpeedUnit::KilometersPerHour => KilometersPerHour::new(value).convert(),
        }
    }
}

impl FromStr for SpeedUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "kt" | "kts" | "knots" => Ok(SpeedUnit::Knots),
            "m/s" => Ok(SpeedUnit::MetersPerSecond),
            "ft/s" => Ok(SpeedUnit::FeetPerSecond),
            "km/h" => Ok(SpeedUnit::KilometersPerHour),
            other => Err(UnitError::Unsupported(other.to_string())),
        }
    }
}

/// Acceleration units accepted when a caller asks for a runtime conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccelerationUnit {
    FeetPerSecondSquared,
    MetersPerSecondSquared,
}

impl AccelerationUnit {
    pub fn value_of<U: Unit<Dimension = Acceleration>>(self, quantity: Quantity<U>) -> f64 {
        match self {
            AccelerationUnit::FeetPerSecondSquared => quantity.feet_per_second_squared(),
            AccelerationUnit::MetersPerSecondSquared => quantity.meters_per_second_squared(),
        }
    }
}

impl FromStr for AccelerationUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ft/s^2" | "ft/s2" => Ok(AccelerationUnit::FeetPerSecondSquared),
            "m/s^2" | "m/s2" => Ok(AccelerationUnit::MetersPerSecondSquared),
            other => Err(UnitError::Unsupported(other.to_string())),
        }
    }
}
