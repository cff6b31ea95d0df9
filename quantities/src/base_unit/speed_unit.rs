/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::SPEED_UNITS;

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
pub enum SpeedUnit {
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Knot,
    FootPerSecond,
}

impl Unit for SpeedUnit {
    const QUANTITY: Quantity = Quantity::Speed;
    const LIST: &'static [Self] = &SPEED_UNITS;
    const REFERENCE: Self = SpeedUnit::MeterPerSecond;

    fn name(&self) -> String {
        match self {
            SpeedUnit::MeterPerSecond => "meter per second".to_string(),
            SpeedUnit::KilometerPerHour => "kilometer per hour".to_string(),
            SpeedUnit::MilePerHour => "mile per hour".to_string(),
            SpeedUnit::Knot => "knot".to_string(),
            SpeedUnit::FootPerSecond => "foot per second".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            SpeedUnit::MeterPerSecond => owned(&["m/s"]),
            SpeedUnit::KilometerPerHour => owned(&["km/h", "km/u", "kph"]),
            SpeedUnit::MilePerHour => owned(&["mph", "mi/h"]),
            SpeedUnit::Knot => owned(&["kn", "kt"]),
            SpeedUnit::FootPerSecond => owned(&["ft/s"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            SpeedUnit::MeterPerSecond => 1.0,
            SpeedUnit::KilometerPerHour => 1000.0 / 3600.0,
            SpeedUnit::MilePerHour => 0.44704,
            SpeedUnit::Knot => 1852.0 / 3600.0,
            SpeedUnit::FootPerSecond => 0.3048,
        }
    }
}

impl RelativeUnit for SpeedUnit {}

impl Display for SpeedUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            SpeedUnit::MeterPerSecond => write!(f, "m/s"),
            SpeedUnit::KilometerPerHour => write!(f, "km/h"),
            SpeedUnit::MilePerHour => write!(f, "mph"),
            SpeedUnit::Knot => write!(f, "kn"),
            SpeedUnit::FootPerSecond => write!(f, "ft/s"),
        }
    }
}
