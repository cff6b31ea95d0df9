/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use super::super::base_unit::DimensionlessUnit;
use super::super::dimension::Dimension;
use super::super::error::QuantityError;
use super::super::parser::{parse_scalar, parse_unit};
use super::super::quantity::Quantity;
use super::super::unit::{RelativeUnit, Unit};
use super::{fmt_scalar, Scalar};

/// A magnitude or a difference of a quantity, stored as its
/// canonical value together with the unit it is preferably
/// displayed in.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    not(feature = "serialize_as_string"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(
    all(feature = "schemars", not(feature = "serialize_as_string")),
    derive(schemars::JsonSchema)
)]
pub struct Relative<U> {
    si: f64,
    unit: U,
}

impl<U: RelativeUnit> Relative<U> {
    pub const QUANTITY: Quantity = U::QUANTITY;

    pub const ZERO: Self = Self::reference(0.0);
    pub const ONE: Self = Self::reference(1.0);
    pub const NAN: Self = Self::reference(f64::NAN);
    pub const POSITIVE_INFINITY: Self = Self::reference(f64::INFINITY);
    pub const NEGATIVE_INFINITY: Self = Self::reference(f64::NEG_INFINITY);
    pub const MAX: Self = Self::reference(f64::MAX);
    pub const MIN: Self = Self::reference(f64::MIN);

    const fn reference(si: f64) -> Self {
        Self {
            si,
            unit: U::REFERENCE,
        }
    }

    pub fn new(value: f64, unit: U) -> Self {
        Self {
            si: unit.to_si(value),
            unit,
        }
    }

    pub fn from_si(si: f64) -> Self {
        Self::reference(si)
    }

    pub fn parse(text: &str) -> Result<Self, QuantityError> {
        let (value, unit) = parse_scalar::<U>(text)?;
        Ok(Self::new(value, unit))
    }

    pub fn of(value: f64, abbreviation: &str) -> Result<Self, QuantityError> {
        Ok(Self::new(value, parse_unit::<U>(abbreviation)?))
    }

    pub fn si(&self) -> f64 {
        self.si
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// Value in the display unit.
    pub fn value(&self) -> f64 {
        self.unit.from_si(self.si)
    }

    pub fn in_unit(&self, unit: U) -> f64 {
        unit.from_si(self.si)
    }

    pub fn with_unit(self, unit: U) -> Self {
        Self { si: self.si, unit }
    }

    pub fn quantity(&self) -> Quantity {
        U::QUANTITY
    }

    pub fn dimension(&self) -> Dimension {
        U::QUANTITY.dimension()
    }

    pub fn abs(self) -> Self {
        Self {
            si: self.si.abs(),
            unit: self.unit,
        }
    }

    pub fn is_nan(&self) -> bool {
        self.si.is_nan()
    }

    pub fn is_finite(&self) -> bool {
        self.si.is_finite()
    }

    /// Linear interpolation (or extrapolation) between `zero` and
    /// `one`, in the display unit of `zero`.
    pub fn interpolate(zero: Self, one: Self, ratio: f64) -> Self {
        let a = zero.value();
        let b = one.in_unit(zero.unit);
        Self::new(a * (1.0 - ratio) + b * ratio, zero.unit)
    }

    pub fn max(a: Self, b: Self) -> Self {
        if b.si > a.si {
            b
        } else {
            a
        }
    }

    pub fn min(a: Self, b: Self) -> Self {
        if b.si < a.si {
            b
        } else {
            a
        }
    }

    pub fn max_of(a: Self, b: Self, rest: &[Self]) -> Self {
        rest.iter().copied().fold(Self::max(a, b), Self::max)
    }

    pub fn min_of(a: Self, b: Self, rest: &[Self]) -> Self {
        rest.iter().copied().fold(Self::min(a, b), Self::min)
    }
}

impl<U: RelativeUnit> Scalar for Relative<U> {
    fn si(&self) -> f64 {
        self.si
    }

    fn dimension(&self) -> Dimension {
        U::QUANTITY.dimension()
    }
}

impl<U: RelativeUnit> Default for Relative<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: Unit> PartialEq for Relative<U> {
    fn eq(&self, other: &Self) -> bool {
        self.si == other.si
    }
}

impl<U: Unit> PartialOrd for Relative<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.si.partial_cmp(&other.si)
    }
}

impl<U: Unit> Display for Relative<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        fmt_scalar(f, self.unit.from_si(self.si), &self.unit)
    }
}

impl<U: RelativeUnit> FromStr for Relative<U> {
    type Err = QuantityError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<U: RelativeUnit> Add<Relative<U>> for Relative<U> {
    type Output = Relative<U>;
    fn add(self, rhs: Relative<U>) -> Relative<U> {
        Self {
            si: self.si + rhs.si,
            unit: self.unit,
        }
    }
}

impl<U: RelativeUnit> Sub<Relative<U>> for Relative<U> {
    type Output = Relative<U>;
    fn sub(self, rhs: Relative<U>) -> Relative<U> {
        Self {
            si: self.si - rhs.si,
            unit: self.unit,
        }
    }
}

impl<U: RelativeUnit> Neg for Relative<U> {
    type Output = Relative<U>;
    fn neg(self) -> Relative<U> {
        Self {
            si: -self.si,
            unit: self.unit,
        }
    }
}

impl<U: RelativeUnit> Mul<f64> for Relative<U> {
    type Output = Relative<U>;
    fn mul(self, rhs: f64) -> Relative<U> {
        Self {
            si: self.si * rhs,
            unit: self.unit,
        }
    }
}

impl<U: RelativeUnit> Mul<Relative<U>> for f64 {
    type Output = Relative<U>;
    fn mul(self, rhs: Relative<U>) -> Relative<U> {
        rhs * self
    }
}

impl<U: RelativeUnit> Div<f64> for Relative<U> {
    type Output = Relative<U>;
    fn div(self, rhs: f64) -> Relative<U> {
        Self {
            si: self.si / rhs,
            unit: self.unit,
        }
    }
}

/* The ratio of two values of the same quantity. */
impl<U: RelativeUnit> Div<Relative<U>> for Relative<U> {
    type Output = Relative<DimensionlessUnit>;
    fn div(self, rhs: Relative<U>) -> Relative<DimensionlessUnit> {
        Relative::from_si(self.si / rhs.si)
    }
}

impl<U: RelativeUnit> Sum for Relative<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(|a, b| a + b).unwrap_or(Self::ZERO)
    }
}

impl<'a, U: RelativeUnit> Sum<&'a Relative<U>> for Relative<U> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/* Serialized as the display string, eg. "12.3 m/s". */
#[cfg(feature = "serialize_as_string")]
impl<U: Unit> serde::Serialize for Relative<U> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        use serde_with::SerializeAs;
        serde_with::DisplayFromStr::serialize_as(self, serializer)
    }
}

#[cfg(feature = "serialize_as_string")]
impl<'de, U: RelativeUnit> serde::Deserialize<'de> for Relative<U> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde_with::DeserializeAs;
        serde_with::DisplayFromStr::deserialize_as(deserializer)
    }
}

#[cfg(all(feature = "schemars", feature = "serialize_as_string"))]
impl<U: Unit> schemars::JsonSchema for Relative<U> {
    fn schema_name() -> String {
        format!("Relative_{:?}", U::QUANTITY)
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}
