/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::AREA_UNITS;

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
pub enum AreaUnit {
    SquareMeter(SiPrefix),
    Are,
    Hectare,
    Acre,
    SquareFoot,
    SquareMile,
}

impl Unit for AreaUnit {
    const QUANTITY: Quantity = Quantity::Area;
    const LIST: &'static [Self] = &AREA_UNITS;
    const REFERENCE: Self = AreaUnit::SquareMeter(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            AreaUnit::SquareMeter(p) => format!("{}square meter", p.name()),
            AreaUnit::Are => "are".to_string(),
            AreaUnit::Hectare => "hectare".to_string(),
            AreaUnit::Acre => "acre".to_string(),
            AreaUnit::SquareFoot => "square foot".to_string(),
            AreaUnit::SquareMile => "square mile".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            AreaUnit::SquareMeter(p) => p.abbreviations(&["m²", "m2"]),
            AreaUnit::Are => owned(&["a"]),
            AreaUnit::Hectare => owned(&["ha"]),
            AreaUnit::Acre => owned(&["ac", "acre"]),
            AreaUnit::SquareFoot => owned(&["ft²", "ft2"]),
            AreaUnit::SquareMile => owned(&["mi²", "mi2"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            AreaUnit::SquareMeter(p) => p.multiplier().powi(2),
            AreaUnit::Are => 100.0,
            AreaUnit::Hectare => 1e4,
            AreaUnit::Acre => 4046.8564224,
            AreaUnit::SquareFoot => 0.09290304,
            AreaUnit::SquareMile => 2589988.110336,
        }
    }
}

impl RelativeUnit for AreaUnit {}

impl Display for AreaUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            AreaUnit::SquareMeter(p) => write!(f, "{}m²", p),
            AreaUnit::Are => write!(f, "a"),
            AreaUnit::Hectare => write!(f, "ha"),
            AreaUnit::Acre => write!(f, "ac"),
            AreaUnit::SquareFoot => write!(f, "ft²"),
            AreaUnit::SquareMile => write!(f, "mi²"),
        }
    }
}
