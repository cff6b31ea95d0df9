/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{RelativeUnit, Unit};
use super::base_units::CONDUCTANCE_UNITS;

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
pub enum ConductanceUnit {
    Siemens(SiPrefix),
}

impl Unit for ConductanceUnit {
    const QUANTITY: Quantity = Quantity::ElectricalConductance;
    const LIST: &'static [Self] = &CONDUCTANCE_UNITS;
    const REFERENCE: Self = ConductanceUnit::Siemens(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            ConductanceUnit::Siemens(p) => format!("{}siemens", p.name()),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            ConductanceUnit::Siemens(p) => p.abbreviations(&["S"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            ConductanceUnit::Siemens(p) => p.multiplier(),
        }
    }
}

impl RelativeUnit for ConductanceUnit {}

impl Display for ConductanceUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            ConductanceUnit::Siemens(p) => write!(f, "{}S", p),
        }
    }
}
