/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{RelativeUnit, Unit};
use super::base_units::LUMINOUS_INTENSITY_UNITS;

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
pub enum LuminousIntensityUnit {
    Candela(SiPrefix),
}

impl Unit for LuminousIntensityUnit {
    const QUANTITY: Quantity = Quantity::LuminousIntensity;
    const LIST: &'static [Self] = &LUMINOUS_INTENSITY_UNITS;
    const REFERENCE: Self = LuminousIntensityUnit::Candela(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            LuminousIntensityUnit::Candela(p) => format!("{}candela", p.name()),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            LuminousIntensityUnit::Candela(p) => p.abbreviations(&["cd"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            LuminousIntensityUnit::Candela(p) => p.multiplier(),
        }
    }
}

impl RelativeUnit for LuminousIntensityUnit {}

impl Display for LuminousIntensityUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            LuminousIntensityUnit::Candela(p) => write!(f, "{}cd", p),
        }
    }
}
