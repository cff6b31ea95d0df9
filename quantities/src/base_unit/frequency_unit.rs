/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::FREQUENCY_UNITS;

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
pub enum FrequencyUnit {
    Hertz(SiPrefix),
    PerMinute,
    PerHour,
    PerDay,
}

impl Unit for FrequencyUnit {
    const QUANTITY: Quantity = Quantity::Frequency;
    const LIST: &'static [Self] = &FREQUENCY_UNITS;
    const REFERENCE: Self = FrequencyUnit::Hertz(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            FrequencyUnit::Hertz(p) => format!("{}hertz", p.name()),
            FrequencyUnit::PerMinute => "per minute".to_string(),
            FrequencyUnit::PerHour => "per hour".to_string(),
            FrequencyUnit::PerDay => "per day".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            FrequencyUnit::Hertz(p) => p.abbreviations(&["Hz"]),
            FrequencyUnit::PerMinute => owned(&["/min", "1/min"]),
            FrequencyUnit::PerHour => owned(&["/h", "1/h"]),
            FrequencyUnit::PerDay => owned(&["/day", "1/day", "/d"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hertz(p) => p.multiplier(),
            FrequencyUnit::PerMinute => 1.0 / 60.0,
            FrequencyUnit::PerHour => 1.0 / 3600.0,
            FrequencyUnit::PerDay => 1.0 / 86400.0,
        }
    }
}

impl RelativeUnit for FrequencyUnit {}

impl Display for FrequencyUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            FrequencyUnit::Hertz(p) => write!(f, "{}Hz", p),
            FrequencyUnit::PerMinute => write!(f, "/min"),
            FrequencyUnit::PerHour => write!(f, "/h"),
            FrequencyUnit::PerDay => write!(f, "/day"),
        }
    }
}
