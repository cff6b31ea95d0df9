/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::CHARGE_UNITS;

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
pub enum ChargeUnit {
    Coulomb(SiPrefix),
    AmpereHour(SiPrefix),
    ElementaryCharge,
}

impl Unit for ChargeUnit {
    const QUANTITY: Quantity = Quantity::ElectricalCharge;
    const LIST: &'static [Self] = &CHARGE_UNITS;
    const REFERENCE: Self = ChargeUnit::Coulomb(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            ChargeUnit::Coulomb(p) => format!("{}coulomb", p.name()),
            ChargeUnit::AmpereHour(p) => format!("{}ampere-hour", p.name()),
            ChargeUnit::ElementaryCharge => "elementary charge".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            ChargeUnit::Coulomb(p) => p.abbreviations(&["C"]),
            ChargeUnit::AmpereHour(p) => p.abbreviations(&["Ah"]),
            ChargeUnit::ElementaryCharge => owned(&["e"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            ChargeUnit::Coulomb(p) => p.multiplier(),
            ChargeUnit::AmpereHour(p) => p.multiplier() * 3600.0,
            ChargeUnit::ElementaryCharge => 1.602176634e-19,
        }
    }
}

impl RelativeUnit for ChargeUnit {}

impl Display for ChargeUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            ChargeUnit::Coulomb(p) => write!(f, "{}C", p),
            ChargeUnit::AmpereHour(p) => write!(f, "{}Ah", p),
            ChargeUnit::ElementaryCharge => write!(f, "e"),
        }
    }
}
