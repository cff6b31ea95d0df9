/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::f64::consts::PI;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::ANGLE_UNITS;

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
pub enum AngleUnit {
    Radian,
    Milliradian,
    Degree,
    ArcMinute,
    ArcSecond,
    Gradian,
    Revolution,
}

impl Unit for AngleUnit {
    const QUANTITY: Quantity = Quantity::Angle;
    const LIST: &'static [Self] = &ANGLE_UNITS;
    const REFERENCE: Self = AngleUnit::Radian;

    fn name(&self) -> String {
        match self {
            AngleUnit::Radian => "radian".to_string(),
            AngleUnit::Milliradian => "milliradian".to_string(),
            AngleUnit::Degree => "degree".to_string(),
            AngleUnit::ArcMinute => "arc minute".to_string(),
            AngleUnit::ArcSecond => "arc second".to_string(),
            AngleUnit::Gradian => "gradian".to_string(),
            AngleUnit::Revolution => "revolution".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            AngleUnit::Radian => owned(&["rad"]),
            AngleUnit::Milliradian => owned(&["mrad"]),
            AngleUnit::Degree => owned(&["°", "deg"]),
            AngleUnit::ArcMinute => owned(&["′", "'", "arcmin"]),
            AngleUnit::ArcSecond => owned(&["″", "\"", "arcsec"]),
            AngleUnit::Gradian => owned(&["gon", "grad"]),
            AngleUnit::Revolution => owned(&["rev"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            AngleUnit::Radian => 1.0,
            AngleUnit::Milliradian => 1e-3,
            AngleUnit::Degree => PI / 180.0,
            AngleUnit::ArcMinute => PI / 10800.0,
            AngleUnit::ArcSecond => PI / 648000.0,
            AngleUnit::Gradian => PI / 200.0,
            AngleUnit::Revolution => 2.0 * PI,
        }
    }
}

impl RelativeUnit for AngleUnit {}

impl Display for AngleUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            AngleUnit::Radian => write!(f, "rad"),
            AngleUnit::Milliradian => write!(f, "mrad"),
            AngleUnit::Degree => write!(f, "°"),
            AngleUnit::ArcMinute => write!(f, "′"),
            AngleUnit::ArcSecond => write!(f, "″"),
            AngleUnit::Gradian => write!(f, "gon"),
            AngleUnit::Revolution => write!(f, "rev"),
        }
    }
}
