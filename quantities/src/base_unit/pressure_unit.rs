/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::PRESSURE_UNITS;

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
pub enum PressureUnit {
    Pascal(SiPrefix),
    Bar,
    Millibar,
    Atmosphere,
    Psi,
    MillimeterOfMercury,
    Torr,
}

impl Unit for PressureUnit {
    const QUANTITY: Quantity = Quantity::Pressure;
    const LIST: &'static [Self] = &PRESSURE_UNITS;
    const REFERENCE: Self = PressureUnit::Pascal(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            PressureUnit::Pascal(p) => format!("{}pascal", p.name()),
            PressureUnit::Bar => "bar".to_string(),
            PressureUnit::Millibar => "millibar".to_string(),
            PressureUnit::Atmosphere => "standard atmosphere".to_string(),
            PressureUnit::Psi => "pound per square inch".to_string(),
            PressureUnit::MillimeterOfMercury => "millimeter of mercury".to_string(),
            PressureUnit::Torr => "torr".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            PressureUnit::Pascal(p) => p.abbreviations(&["Pa"]),
            PressureUnit::Bar => owned(&["bar"]),
            PressureUnit::Millibar => owned(&["mbar"]),
            PressureUnit::Atmosphere => owned(&["atm"]),
            PressureUnit::Psi => owned(&["psi"]),
            PressureUnit::MillimeterOfMercury => owned(&["mmHg"]),
            PressureUnit::Torr => owned(&["Torr"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            PressureUnit::Pascal(p) => p.multiplier(),
            PressureUnit::Bar => 1e5,
            PressureUnit::Millibar => 100.0,
            PressureUnit::Atmosphere => 101325.0,
            PressureUnit::Psi => 6894.757293168361,
            PressureUnit::MillimeterOfMercury => 133.322387415,
            PressureUnit::Torr => 101325.0 / 760.0,
        }
    }
}

impl RelativeUnit for PressureUnit {}

impl Display for PressureUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            PressureUnit::Pascal(p) => write!(f, "{}Pa", p),
            PressureUnit::Bar => write!(f, "bar"),
            PressureUnit::Millibar => write!(f, "mbar"),
            PressureUnit::Atmosphere => write!(f, "atm"),
            PressureUnit::Psi => write!(f, "psi"),
            PressureUnit::MillimeterOfMercury => write!(f, "mmHg"),
            PressureUnit::Torr => write!(f, "Torr"),
        }
    }
}
