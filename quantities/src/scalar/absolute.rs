/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::super::dimension::Dimension;
use super::super::error::QuantityError;
use super::super::parser::{parse_scalar, parse_unit};
use super::super::quantity::Quantity;
use super::super::unit::{AbsoluteUnit, Unit};
use super::{fmt_scalar, Relative};

/// A point on the scale of a quantity, eg. a moment in time or a
/// thermodynamic temperature. Points cannot be added to each other;
/// their difference is a value of the companion relative quantity.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    not(feature = "serialize_as_string"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(
    all(feature = "schemars", not(feature = "serialize_as_string")),
    derive(schemars::JsonSchema)
)]
pub struct Absolute<U> {
    si: f64,
    unit: U,
}

impl<U: AbsoluteUnit> Absolute<U> {
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

    pub fn is_nan(&self) -> bool {
        self.si.is_nan()
    }

    pub fn is_finite(&self) -> bool {
        self.si.is_finite()
    }

    /// Point between `zero` and `one`, in the display unit of `zero`.
    /// Only ratios in [0, 1] are accepted: extrapolating beyond the
    /// bracketing points is rejected with `OutOfRange`.
    pub fn interpolate(
        zero: Self,
        one: Self,
        ratio: f64,
    ) -> Result<Self, QuantityError> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(QuantityError::OutOfRange {
                quantity: U::QUANTITY,
                ratio,
            });
        }
        let a = zero.value();
        let b = one.in_unit(zero.unit);
        Ok(Self::new(a * (1.0 - ratio) + b * ratio, zero.unit))
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

impl<U: Unit> PartialEq for Absolute<U> {
    fn eq(&self, other: &Self) -> bool {
        self.si == other.si
    }
}

impl<U: Unit> PartialOrd for Absolute<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.si.partial_cmp(&other.si)
    }
}

impl<U: Unit> Display for Absolute<U> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        fmt_scalar(f, self.unit.from_si(self.si), &self.unit)
    }
}

impl<U: AbsoluteUnit> FromStr for Absolute<U> {
    type Err = QuantityError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/* Point - point = difference. The offsets cancel out. */
impl<U: AbsoluteUnit> Sub<Absolute<U>> for Absolute<U> {
    type Output = Relative<U::Relative>;
    fn sub(self, rhs: Absolute<U>) -> Relative<U::Relative> {
        Relative::from_si(self.si - rhs.si).with_unit(self.unit.relative())
    }
}

impl<U: AbsoluteUnit> Add<Relative<U::Relative>> for Absolute<U> {
    type Output = Absolute<U>;
    fn add(self, rhs: Relative<U::Relative>) -> Absolute<U> {
        Self {
            si: self.si + rhs.si(),
            unit: self.unit,
        }
    }
}

impl<U: AbsoluteUnit> Sub<Relative<U::Relative>> for Absolute<U> {
    type Output = Absolute<U>;
    fn sub(self, rhs: Relative<U::Relative>) -> Absolute<U> {
        Self {
            si: self.si - rhs.si(),
            unit: self.unit,
        }
    }
}

impl<U: AbsoluteUnit> Add<Absolute<U>> for Relative<U::Relative> {
    type Output = Absolute<U>;
    fn add(self, rhs: Absolute<U>) -> Absolute<U> {
        rhs + self
    }
}

/* Serialized as the display string, eg. "12.3 m/s". */
#[cfg(feature = "serialize_as_string")]
impl<U: Unit> serde::Serialize for Absolute<U> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        use serde_with::SerializeAs;
        serde_with::DisplayFromStr::serialize_as(self, serializer)
    }
}

#[cfg(feature = "serialize_as_string")]
impl<'de, U: AbsoluteUnit> serde::Deserialize<'de> for Absolute<U> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde_with::DeserializeAs;
        serde_with::DisplayFromStr::deserialize_as(deserializer)
    }
}

#[cfg(all(feature = "schemars", feature = "serialize_as_string"))]
impl<U: Unit> schemars::JsonSchema for Absolute<U> {
    fn schema_name() -> String {
        format!("Absolute_{:?}", U::QUANTITY)
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}
