/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::LENGTH_UNITS;

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
pub enum LengthUnit {
    Meter(SiPrefix),
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
    AstronomicalUnit,
    LightYear,
    Parsec,
}

impl Unit for LengthUnit {
    const QUANTITY: Quantity = Quantity::Length;
    const LIST: &'static [Self] = &LENGTH_UNITS;
    const REFERENCE: Self = LengthUnit::Meter(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            LengthUnit::Meter(p) => format!("{}meter", p.name()),
            LengthUnit::Inch => "inch".to_string(),
            LengthUnit::Foot => "foot".to_string(),
            LengthUnit::Yard => "yard".to_string(),
            LengthUnit::Mile => "mile".to_string(),
            LengthUnit::NauticalMile => "nautical mile".to_string(),
            LengthUnit::AstronomicalUnit => "astronomical unit".to_string(),
            LengthUnit::LightYear => "light year".to_string(),
            LengthUnit::Parsec => "parsec".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            LengthUnit::Meter(p) => p.abbreviations(&["m"]),
            LengthUnit::Inch => owned(&["in"]),
            LengthUnit::Foot => owned(&["ft"]),
            LengthUnit::Yard => owned(&["yd"]),
            LengthUnit::Mile => owned(&["mi"]),
            LengthUnit::NauticalMile => owned(&["NM", "nmi"]),
            LengthUnit::AstronomicalUnit => owned(&["AU", "au"]),
            LengthUnit::LightYear => owned(&["ly"]),
            LengthUnit::Parsec => owned(&["pc"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            LengthUnit::Meter(p) => p.multiplier(),
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.344,
            LengthUnit::NauticalMile => 1852.0,
            LengthUnit::AstronomicalUnit => 149597870700.0,
            LengthUnit::LightYear => 9460730472580800.0,
            LengthUnit::Parsec => 3.085677581491367e16,
        }
    }
}

impl RelativeUnit for LengthUnit {}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            LengthUnit::Meter(p) => write!(f, "{}m", p),
            LengthUnit::Inch => write!(f, "in"),
            LengthUnit::Foot => write!(f, "ft"),
            LengthUnit::Yard => write!(f, "yd"),
            LengthUnit::Mile => write!(f, "mi"),
            LengthUnit::NauticalMile => write!(f, "NM"),
            LengthUnit::AstronomicalUnit => write!(f, "AU"),
            LengthUnit::LightYear => write!(f, "ly"),
            LengthUnit::Parsec => write!(f, "pc"),
        }
    }
}
