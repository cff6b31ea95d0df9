/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{RelativeUnit, Unit};
use super::base_units::AMOUNT_UNITS;

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
pub enum AmountUnit {
    Mole(SiPrefix),
}

impl Unit for AmountUnit {
    const QUANTITY: Quantity = Quantity::AmountOfSubstance;
    const LIST: &'static [Self] = &AMOUNT_UNITS;
    const REFERENCE: Self = AmountUnit::Mole(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            AmountUnit::Mole(p) => format!("{}mole", p.name()),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            AmountUnit::Mole(p) => p.abbreviations(&["mol"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            AmountUnit::Mole(p) => p.multiplier(),
        }
    }
}

impl RelativeUnit for AmountUnit {}

impl Display for AmountUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            AmountUnit::Mole(p) => write!(f, "{}mol", p),
        }
    }
}
