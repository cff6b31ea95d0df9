/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::FORCE_UNITS;

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
pub enum ForceUnit {
    Newton(SiPrefix),
    Dyne,
    KilogramForce,
    PoundForce,
}

impl Unit for ForceUnit {
    const QUANTITY: Quantity = Quantity::Force;
    const LIST: &'static [Self] = &FORCE_UNITS;
    const REFERENCE: Self = ForceUnit::Newton(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            ForceUnit::Newton(p) => format!("{}newton", p.name()),
            ForceUnit::Dyne => "dyne".to_string(),
            ForceUnit::KilogramForce => "kilogram-force".to_string(),
            ForceUnit::PoundForce => "pound-force".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            ForceUnit::Newton(p) => p.abbreviations(&["N"]),
            ForceUnit::Dyne => owned(&["dyn"]),
            ForceUnit::KilogramForce => owned(&["kgf"]),
            ForceUnit::PoundForce => owned(&["lbf"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            ForceUnit::Newton(p) => p.multiplier(),
            ForceUnit::Dyne => 1e-5,
            ForceUnit::KilogramForce => 9.80665,
            ForceUnit::PoundForce => 4.4482216152605,
        }
    }
}

impl RelativeUnit for ForceUnit {}

impl Display for ForceUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            ForceUnit::Newton(p) => write!(f, "{}N", p),
            ForceUnit::Dyne => write!(f, "dyn"),
            ForceUnit::KilogramForce => write!(f, "kgf"),
            ForceUnit::PoundForce => write!(f, "lbf"),
        }
    }
}
