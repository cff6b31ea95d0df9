/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{RelativeUnit, Unit};
use super::base_units::CURRENT_UNITS;

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
pub enum CurrentUnit {
    Ampere(SiPrefix),
}

impl Unit for CurrentUnit {
    const QUANTITY: Quantity = Quantity::ElectricalCurrent;
    const LIST: &'static [Self] = &CURRENT_UNITS;
    const REFERENCE: Self = CurrentUnit::Ampere(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            CurrentUnit::Ampere(p) => format!("{}ampere", p.name()),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            CurrentUnit::Ampere(p) => p.abbreviations(&["A"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            CurrentUnit::Ampere(p) => p.multiplier(),
        }
    }
}

impl RelativeUnit for CurrentUnit {}

impl Display for CurrentUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            CurrentUnit::Ampere(p) => write!(f, "{}A", p),
        }
    }
}
