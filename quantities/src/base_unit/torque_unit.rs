/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::TORQUE_UNITS;

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
pub enum TorqueUnit {
    NewtonMeter,
    KilogramForceMeter,
    PoundForceFoot,
}

impl Unit for TorqueUnit {
    const QUANTITY: Quantity = Quantity::Torque;
    const LIST: &'static [Self] = &TORQUE_UNITS;
    const REFERENCE: Self = TorqueUnit::NewtonMeter;

    fn name(&self) -> String {
        match self {
            TorqueUnit::NewtonMeter => "newton meter".to_string(),
            TorqueUnit::KilogramForceMeter => "kilogram-force meter".to_string(),
            TorqueUnit::PoundForceFoot => "pound-force foot".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            TorqueUnit::NewtonMeter => owned(&["N⋅m", "N.m", "Nm"]),
            TorqueUnit::KilogramForceMeter => owned(&["kgf⋅m", "kgf.m"]),
            TorqueUnit::PoundForceFoot => owned(&["lbf⋅ft", "lbf.ft"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            TorqueUnit::NewtonMeter => 1.0,
            TorqueUnit::KilogramForceMeter => 9.80665,
            TorqueUnit::PoundForceFoot => 1.3558179483314004,
        }
    }
}

impl RelativeUnit for TorqueUnit {}

impl Display for TorqueUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            TorqueUnit::NewtonMeter => write!(f, "N⋅m"),
            TorqueUnit::KilogramForceMeter => write!(f, "kgf⋅m"),
            TorqueUnit::PoundForceFoot => write!(f, "lbf⋅ft"),
        }
    }
}
