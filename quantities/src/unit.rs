/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::error::QuantityError;
use super::parser::parse_unit;
use super::quantity::Quantity;

/// A unit of one quantity: an affine transform between values in
/// this unit and values in the quantity's reference unit,
///
///   si = value * multiplier + offset
///
/// Every quantity has its own unit type. `LIST` enumerates all its
/// units and `REFERENCE` is the one with multiplier 1 and offset 0,
/// in which scalar values are stored.
pub trait Unit:
    Copy + PartialEq + Debug + Display + Send + Sync + 'static
{
    const QUANTITY: Quantity;
    const LIST: &'static [Self];
    const REFERENCE: Self;

    fn name(&self) -> String;

    /// Accepted abbreviations, display form first.
    fn abbreviations(&self) -> Vec<String>;

    fn multiplier(&self) -> f64;

    fn offset(&self) -> f64 {
        0.0
    }

    fn to_si(&self, value: f64) -> f64 {
        value * self.multiplier() + self.offset()
    }

    fn from_si(&self, si: f64) -> f64 {
        (si - self.offset()) / self.multiplier()
    }

    fn convert(&self, other: &Self, value: f64) -> f64 {
        other.from_si(self.to_si(value))
    }

    fn dimension(&self) -> Dimension {
        Self::QUANTITY.dimension()
    }

    fn is_reference(&self) -> bool {
        *self == Self::REFERENCE
    }

    fn from_abbreviation(abbreviation: &str) -> Result<Self, QuantityError> {
        parse_unit(abbreviation)
    }

    fn info(&self) -> UnitInfo {
        UnitInfo {
            name: self.name(),
            abbreviations: self.abbreviations(),
            scale: self.multiplier(),
            offset: self.offset(),
            quantity: Self::QUANTITY,
        }
    }
}

/// Units of magnitudes and differences. These never have an offset.
pub trait RelativeUnit: Unit {}

/// Units of points on a scale, eg. a calendar or thermodynamic
/// temperature. Differences between two points are expressed in
/// the companion relative unit.
pub trait AbsoluteUnit: Unit {
    type Relative: RelativeUnit;
    fn relative(&self) -> Self::Relative;
}

/// Untyped description of a unit, as kept in the registry.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct UnitInfo {
    pub name: String,
    pub abbreviations: Vec<String>,
    pub scale: f64,
    pub offset: f64,
    pub quantity: Quantity,
}

impl UnitInfo {
    pub fn abbreviation(&self) -> &str {
        self.abbreviations.first().map_or("", |a| a.as_str())
    }

    pub fn dimension(&self) -> Dimension {
        self.quantity.dimension()
    }

    pub fn to_si(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    pub fn from_si(&self, si: f64) -> f64 {
        (si - self.offset) / self.scale
    }
}

impl Display for UnitInfo {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.abbreviation())
    }
}

pub(crate) fn owned(abbreviations: &[&str]) -> Vec<String> {
    abbreviations.iter().map(|a| a.to_string()).collect()
}
