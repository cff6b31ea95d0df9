/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{FracPrefix, Prefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::DURATION_UNITS;

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
pub enum DurationUnit {
    Second(FracPrefix),
    Minute,
    Hour,
    Day,
    Week,
}

impl Unit for DurationUnit {
    const QUANTITY: Quantity = Quantity::Duration;
    const LIST: &'static [Self] = &DURATION_UNITS;
    const REFERENCE: Self = DurationUnit::Second(FracPrefix::Unit);

    fn name(&self) -> String {
        match self {
            DurationUnit::Second(p) => format!("{}second", p.name()),
            DurationUnit::Minute => "minute".to_string(),
            DurationUnit::Hour => "hour".to_string(),
            DurationUnit::Day => "day".to_string(),
            DurationUnit::Week => "week".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            DurationUnit::Second(p) => p.abbreviations(&["s", "sec"]),
            DurationUnit::Minute => owned(&["min"]),
            DurationUnit::Hour => owned(&["h", "hr", "u"]),
            DurationUnit::Day => owned(&["day", "d", "dag"]),
            DurationUnit::Week => owned(&["wk", "week"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            DurationUnit::Second(p) => p.multiplier(),
            DurationUnit::Minute => 60.0,
            DurationUnit::Hour => 3600.0,
            DurationUnit::Day => 86400.0,
            DurationUnit::Week => 604800.0,
        }
    }
}

impl RelativeUnit for DurationUnit {}

impl Display for DurationUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            DurationUnit::Second(p) => write!(f, "{}s", p),
            DurationUnit::Minute => write!(f, "min"),
            DurationUnit::Hour => write!(f, "h"),
            DurationUnit::Day => write!(f, "day"),
            DurationUnit::Week => write!(f, "wk"),
        }
    }
}
