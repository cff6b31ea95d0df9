/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::POWER_UNITS;

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
pub enum PowerUnit {
    Watt(SiPrefix),
    Horsepower,
    ErgPerSecond,
}

impl Unit for PowerUnit {
    const QUANTITY: Quantity = Quantity::Power;
    const LIST: &'static [Self] = &POWER_UNITS;
    const REFERENCE: Self = PowerUnit::Watt(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            PowerUnit::Watt(p) => format!("{}watt", p.name()),
            PowerUnit::Horsepower => "horsepower".to_string(),
            PowerUnit::ErgPerSecond => "erg per second".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            PowerUnit::Watt(p) => p.abbreviations(&["W"]),
            PowerUnit::Horsepower => owned(&["hp"]),
            PowerUnit::ErgPerSecond => owned(&["erg/s"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            PowerUnit::Watt(p) => p.multiplier(),
            PowerUnit::Horsepower => 745.69987158227022,
            PowerUnit::ErgPerSecond => 1e-7,
        }
    }
}

impl RelativeUnit for PowerUnit {}

impl Display for PowerUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            PowerUnit::Watt(p) => write!(f, "{}W", p),
            PowerUnit::Horsepower => write!(f, "hp"),
            PowerUnit::ErgPerSecond => write!(f, "erg/s"),
        }
    }
}
