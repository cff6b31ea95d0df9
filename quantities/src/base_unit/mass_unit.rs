/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::MASS_UNITS;

/// The reference unit is the kilogram.
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
pub enum MassUnit {
    Gram(SiPrefix),
    Tonne,
    Pound,
    Ounce,
    Dalton,
}

impl Unit for MassUnit {
    const QUANTITY: Quantity = Quantity::Mass;
    const LIST: &'static [Self] = &MASS_UNITS;
    const REFERENCE: Self = MassUnit::Gram(SiPrefix::Kilo);

    fn name(&self) -> String {
        match self {
            MassUnit::Gram(p) => format!("{}gram", p.name()),
            MassUnit::Tonne => "tonne".to_string(),
            MassUnit::Pound => "pound".to_string(),
            MassUnit::Ounce => "ounce".to_string(),
            MassUnit::Dalton => "dalton".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            MassUnit::Gram(p) => p.abbreviations(&["g"]),
            MassUnit::Tonne => owned(&["t"]),
            MassUnit::Pound => owned(&["lb", "lbs"]),
            MassUnit::Ounce => owned(&["oz"]),
            MassUnit::Dalton => owned(&["Da"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            MassUnit::Gram(p) => p.multiplier() / 1000.0,
            MassUnit::Tonne => 1000.0,
            MassUnit::Pound => 0.45359237,
            MassUnit::Ounce => 0.028349523125,
            MassUnit::Dalton => 1.66053906660e-27,
        }
    }
}

impl RelativeUnit for MassUnit {}

impl Display for MassUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            MassUnit::Gram(p) => write!(f, "{}g", p),
            MassUnit::Tonne => write!(f, "t"),
            MassUnit::Pound => write!(f, "lb"),
            MassUnit::Ounce => write!(f, "oz"),
            MassUnit::Dalton => write!(f, "Da"),
        }
    }
}
