/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{RelativeUnit, Unit};
use super::base_units::POTENTIAL_UNITS;

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
pub enum PotentialUnit {
    Volt(SiPrefix),
}

impl Unit for PotentialUnit {
    const QUANTITY: Quantity = Quantity::ElectricalPotential;
    const LIST: &'static [Self] = &POTENTIAL_UNITS;
    const REFERENCE: Self = PotentialUnit::Volt(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            PotentialUnit::Volt(p) => format!("{}volt", p.name()),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            PotentialUnit::Volt(p) => p.abbreviations(&["V"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            PotentialUnit::Volt(p) => p.multiplier(),
        }
    }
}

impl RelativeUnit for PotentialUnit {}

impl Display for PotentialUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            PotentialUnit::Volt(p) => write!(f, "{}V", p),
        }
    }
}
