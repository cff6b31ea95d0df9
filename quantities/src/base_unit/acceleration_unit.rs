/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::ACCELERATION_UNITS;

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
pub enum AccelerationUnit {
    MeterPerSecondSquared,
    KilometerPerHourPerSecond,
    FootPerSecondSquared,
    StandardGravity,
    Gal,
}

impl Unit for AccelerationUnit {
    const QUANTITY: Quantity = Quantity::Acceleration;
    const LIST: &'static [Self] = &ACCELERATION_UNITS;
    const REFERENCE: Self = AccelerationUnit::MeterPerSecondSquared;

    fn name(&self) -> String {
        match self {
            AccelerationUnit::MeterPerSecondSquared => "meter per second squared".to_string(),
            AccelerationUnit::KilometerPerHourPerSecond => "kilometer per hour per second".to_string(),
            AccelerationUnit::FootPerSecondSquared => "foot per second squared".to_string(),
            AccelerationUnit::StandardGravity => "standard gravity".to_string(),
            AccelerationUnit::Gal => "gal".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            AccelerationUnit::MeterPerSecondSquared => owned(&["m/s²", "m/s2"]),
            AccelerationUnit::KilometerPerHourPerSecond => owned(&["km/h/s"]),
            AccelerationUnit::FootPerSecondSquared => owned(&["ft/s²", "ft/s2"]),
            AccelerationUnit::StandardGravity => owned(&["g0", "gn"]),
            AccelerationUnit::Gal => owned(&["Gal"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            AccelerationUnit::MeterPerSecondSquared => 1.0,
            AccelerationUnit::KilometerPerHourPerSecond => 1000.0 / 3600.0,
            AccelerationUnit::FootPerSecondSquared => 0.3048,
            AccelerationUnit::StandardGravity => 9.80665,
            AccelerationUnit::Gal => 0.01,
        }
    }
}

impl RelativeUnit for AccelerationUnit {}

impl Display for AccelerationUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            AccelerationUnit::MeterPerSecondSquared => write!(f, "m/s²"),
            AccelerationUnit::KilometerPerHourPerSecond => write!(f, "km/h/s"),
            AccelerationUnit::FootPerSecondSquared => write!(f, "ft/s²"),
            AccelerationUnit::StandardGravity => write!(f, "g0"),
            AccelerationUnit::Gal => write!(f, "Gal"),
        }
    }
}
