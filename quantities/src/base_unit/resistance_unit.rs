/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{RelativeUnit, Unit};
use super::base_units::RESISTANCE_UNITS;

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
pub enum ResistanceUnit {
    Ohm(SiPrefix),
}

impl Unit for ResistanceUnit {
    const QUANTITY: Quantity = Quantity::ElectricalResistance;
    const LIST: &'static [Self] = &RESISTANCE_UNITS;
    const REFERENCE: Self = ResistanceUnit::Ohm(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            ResistanceUnit::Ohm(p) => format!("{}ohm", p.name()),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            ResistanceUnit::Ohm(p) => p.abbreviations(&["Ω", "ohm"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            ResistanceUnit::Ohm(p) => p.multiplier(),
        }
    }
}

impl RelativeUnit for ResistanceUnit {}

impl Display for ResistanceUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            ResistanceUnit::Ohm(p) => write!(f, "{}Ω", p),
        }
    }
}
