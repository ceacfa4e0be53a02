use std::{
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A unit of measurement belonging to a single physical dimension.
///
/// `TO_BASE` is the factor taking a value expressed in this unit to the
/// dimension's base unit (metre, metre per second, metre per second squared,
/// radian). Converting between two units of the same dimension is therefore
/// `value * FROM::TO_BASE / TO::TO_BASE`.
pub trait Unit: Copy + Clone + fmt::Debug + Default + PartialEq + Send + Sync + 'static {
    type Dimension;
    const TO_BASE: f64;
    const SYMBOL: &'static str;
}

/// An immutable scalar tagged with its unit.
///
/// Arithmetic is only defined between quantities of the same unit, and
/// conversion only between units sharing a dimension, so mixing feet with
/// knots is a compile error rather than a runtime surprise.
#[derive(Clone, Copy, Default)]
pub struct Quantity<U: Unit> {
    value: f64,
    _unit: PhantomData<U>,
}

impl<U: Unit> Quantity<U> {
    pub const ZERO: Self = Self::new(0.0);

    pub const fn new(value: f64) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Raw value expressed in `U`.
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Converts into another unit of the same dimension.
    pub fn convert<V>(self) -> Quantity<V>
    where
        V: Unit<Dimension = U::Dimension>,
    {
        Quantity::new(self.value * U::TO_BASE / V::TO_BASE)
    }

    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    pub fn signum(self) -> f64 {
        self.value.signum()
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.value.min(other.value))
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(self.value.max(other.value))
    }

    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(self.value.clamp(min.value, max.value))
    }

    /// Rounds to `decimals` places, half away from zero.
    pub fn round_to(self, decimals: i32) -> Self {
        Self::new(crate::utils::round_to(self.value, decimals))
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    pub fn symbol(&self) -> &'static str {
        U::SYMBOL
    }
}

impl<U: Unit> fmt::Debug for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, U::SYMBOL)
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.value, U::SYMBOL),
            None => write!(f, "{} {}", self.value, U::SYMBOL),
        }
    }
}

impl<U: Unit> PartialEq for Quantity<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.value + other.value)
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.value - other.value)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    fn add_assign(&mut self, other: Self) {
        self.value += other.value;
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    fn sub_assign(&mut self, other: Self) {
        self.value -= other.value;
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;

    fn mul(self, rhs: Quantity<U>) -> Quantity<U> {
        Quantity::new(self * rhs.value)
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs)
    }
}

/// Ratio of two quantities of the same unit.
impl<U: Unit> Div for Quantity<U> {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.value / rhs.value
    }
}

impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}
