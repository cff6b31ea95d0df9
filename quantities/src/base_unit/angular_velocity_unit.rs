/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::f64::consts::PI;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::ANGULAR_VELOCITY_UNITS;

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
pub enum AngularVelocityUnit {
    RadianPerSecond,
    DegreePerSecond,
    RevolutionPerSecond,
    RevolutionPerMinute,
}

impl Unit for AngularVelocityUnit {
    const QUANTITY: Quantity = Quantity::AngularVelocity;
    const LIST: &'static [Self] = &ANGULAR_VELOCITY_UNITS;
    const REFERENCE: Self = AngularVelocityUnit::RadianPerSecond;

    fn name(&self) -> String {
        match self {
            AngularVelocityUnit::RadianPerSecond => "radian per second".to_string(),
            AngularVelocityUnit::DegreePerSecond => "degree per second".to_string(),
            AngularVelocityUnit::RevolutionPerSecond => "revolution per second".to_string(),
            AngularVelocityUnit::RevolutionPerMinute => "revolution per minute".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            AngularVelocityUnit::RadianPerSecond => owned(&["rad/s"]),
            AngularVelocityUnit::DegreePerSecond => owned(&["°/s", "deg/s"]),
            AngularVelocityUnit::RevolutionPerSecond => owned(&["rps", "rev/s"]),
            AngularVelocityUnit::RevolutionPerMinute => owned(&["rpm", "rev/min"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            AngularVelocityUnit::RadianPerSecond => 1.0,
            AngularVelocityUnit::DegreePerSecond => PI / 180.0,
            AngularVelocityUnit::RevolutionPerSecond => 2.0 * PI,
            AngularVelocityUnit::RevolutionPerMinute => 2.0 * PI / 60.0,
        }
    }
}

impl RelativeUnit for AngularVelocityUnit {}

impl Display for AngularVelocityUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            AngularVelocityUnit::RadianPerSecond => write!(f, "rad/s"),
            AngularVelocityUnit::DegreePerSecond => write!(f, "°/s"),
            AngularVelocityUnit::RevolutionPerSecond => write!(f, "rps"),
            AngularVelocityUnit::RevolutionPerMinute => write!(f, "rpm"),
        }
    }
}
