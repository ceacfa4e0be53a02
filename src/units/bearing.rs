use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Degrees, Radians};

/// A compass direction, always normalised into (0°, 360°].
///
/// North is represented as 360 rather than 0, matching how headings are read
/// off a heading tape.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Bearing(f64);

impl Bearing {
    pub const NORTH: Bearing = Bearing(360.0);

    pub fn new(degrees: f64) -> Self {
        Self(normalize(degrees))
    }

    pub fn from_radians(radians: f64) -> Self {
        Self::new(Radians::new(radians).degrees())
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn radians(&self) -> f64 {
        Degrees::new(self.0).radians()
    }

    pub fn as_degrees(&self) -> Degrees {
        Degrees::new(self.0)
    }

    /// The opposite direction, e.g. where a wind is blowing *to* given where
    /// it comes *from*.
    pub fn reciprocal(&self) -> Self {
        Self::new(self.0 - 180.0)
    }

    /// Rotates clockwise by `delta` (negative rotates anticlockwise).
    pub fn rotate(&self, delta: Degrees) -> Self {
        Self::new(self.0 + delta.degrees())
    }

    /// Rounds to the nearest whole degree, keeping the normalisation.
    pub fn round(&self) -> Self {
        Self::new(self.0.round())
    }
}

fn normalize(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 360.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped == 0.0 {
        360.0
    } else {
        wrapped
    }
}

impl Default for Bearing {
    fn default() -> Self {
        Self::NORTH
    }
}

impl From<Degrees> for Bearing {
    fn from(angle: Degrees) -> Self {
        Self::new(angle.value())
    }
}

impl fmt::Debug for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bearing({:.3})", self.0)
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03.0}", self.0)
    }
}

impl Serialize for Bearing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Bearing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}
