/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::f64::consts::PI;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, AbsoluteUnit, Unit};
use super::base_units::DIRECTION_UNITS;
use super::AngleUnit;

/// Directions in the plane, measured counterclockwise. The reference
/// is zero at east; the north-based units are zero at north. All
/// units turn the same way as `AngleUnit`, so adding an angle to a
/// direction rotates it counterclockwise in every unit.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum DirectionUnit {
    EastRadian,
    EastDegree,
    NorthRadian,
    NorthDegree,
}

impl Unit for DirectionUnit {
    const QUANTITY: Quantity = Quantity::Direction;
    const LIST: &'static [Self] = &DIRECTION_UNITS;
    const REFERENCE: Self = DirectionUnit::EastRadian;

    fn name(&self) -> String {
        match self {
            DirectionUnit::EastRadian => "radian from east".to_string(),
            DirectionUnit::EastDegree => "degree from east".to_string(),
            DirectionUnit::NorthRadian => "radian from north".to_string(),
            DirectionUnit::NorthDegree => "degree from north".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            DirectionUnit::EastRadian => owned(&["rad(E)"]),
            DirectionUnit::EastDegree => owned(&["°(E)", "deg(E)"]),
            DirectionUnit::NorthRadian => owned(&["rad(N)"]),
            DirectionUnit::NorthDegree => owned(&["°(N)", "deg(N)"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            DirectionUnit::EastRadian => 1.0,
            DirectionUnit::EastDegree => PI / 180.0,
            DirectionUnit::NorthRadian => 1.0,
            DirectionUnit::NorthDegree => PI / 180.0,
        }
    }

    fn offset(&self) -> f64 {
        match self {
            DirectionUnit::NorthRadian => PI / 2.0,
            DirectionUnit::NorthDegree => PI / 2.0,
            _ => 0.0,
        }
    }
}

impl AbsoluteUnit for DirectionUnit {
    type Relative = AngleUnit;

    fn relative(&self) -> AngleUnit {
        match self {
            DirectionUnit::EastRadian => AngleUnit::Radian,
            DirectionUnit::EastDegree => AngleUnit::Degree,
            DirectionUnit::NorthRadian => AngleUnit::Radian,
            DirectionUnit::NorthDegree => AngleUnit::Degree,
        }
    }
}

impl Display for DirectionUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            DirectionUnit::EastRadian => write!(f, "rad(E)"),
            DirectionUnit::EastDegree => write!(f, "°(E)"),
            DirectionUnit::NorthRadian => write!(f, "rad(N)"),
            DirectionUnit::NorthDegree => write!(f, "°(N)"),
        }
    }
}
