/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, AbsoluteUnit, Unit};
use super::base_units::POSITION_UNITS;
use super::LengthUnit;

/// Positions along an axis, relative to an arbitrary origin.
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
pub enum PositionUnit {
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

impl Unit for PositionUnit {
    const QUANTITY: Quantity = Quantity::Position;
    const LIST: &'static [Self] = &POSITION_UNITS;
    const REFERENCE: Self = PositionUnit::Meter(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            PositionUnit::Meter(p) => format!("{}meter", p.name()),
            PositionUnit::Inch => "inch".to_string(),
            PositionUnit::Foot => "foot".to_string(),
            PositionUnit::Yard => "yard".to_string(),
            PositionUnit::Mile => "mile".to_string(),
            PositionUnit::NauticalMile => "nautical mile".to_string(),
            PositionUnit::AstronomicalUnit => "astronomical unit".to_string(),
            PositionUnit::LightYear => "light year".to_string(),
            PositionUnit::Parsec => "parsec".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            PositionUnit::Meter(p) => p.abbreviations(&["m"]),
            PositionUnit::Inch => owned(&["in"]),
            PositionUnit::Foot => owned(&["ft"]),
            PositionUnit::Yard => owned(&["yd"]),
            PositionUnit::Mile => owned(&["mi"]),
            PositionUnit::NauticalMile => owned(&["NM", "nmi"]),
            PositionUnit::AstronomicalUnit => owned(&["AU", "au"]),
            PositionUnit::LightYear => owned(&["ly"]),
            PositionUnit::Parsec => owned(&["pc"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            PositionUnit::Meter(p) => p.multiplier(),
            PositionUnit::Inch => 0.0254,
            PositionUnit::Foot => 0.3048,
            PositionUnit::Yard => 0.9144,
            PositionUnit::Mile => 1609.344,
            PositionUnit::NauticalMile => 1852.0,
            PositionUnit::AstronomicalUnit => 149597870700.0,
            PositionUnit::LightYear => 9460730472580800.0,
            PositionUnit::Parsec => 3.085677581491367e16,
        }
    }
}

impl AbsoluteUnit for PositionUnit {
    type Relative = LengthUnit;

    fn relative(&self) -> LengthUnit {
        match self {
            PositionUnit::Meter(p) => LengthUnit::Meter(*p),
            PositionUnit::Inch => LengthUnit::Inch,
            PositionUnit::Foot => LengthUnit::Foot,
            PositionUnit::Yard => LengthUnit::Yard,
            PositionUnit::Mile => LengthUnit::Mile,
            PositionUnit::NauticalMile => LengthUnit::NauticalMile,
            PositionUnit::AstronomicalUnit => LengthUnit::AstronomicalUnit,
            PositionUnit::LightYear => LengthUnit::LightYear,
            PositionUnit::Parsec => LengthUnit::Parsec,
        }
    }
}

impl Display for PositionUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            PositionUnit::Meter(p) => write!(f, "{}m", p),
            PositionUnit::Inch => write!(f, "in"),
            PositionUnit::Foot => write!(f, "ft"),
            PositionUnit::Yard => write!(f, "yd"),
            PositionUnit::Mile => write!(f, "mi"),
            PositionUnit::NauticalMile => write!(f, "NM"),
            PositionUnit::AstronomicalUnit => write!(f, "AU"),
            PositionUnit::LightYear => write!(f, "ly"),
            PositionUnit::Parsec => write!(f, "pc"),
        }
    }
}
