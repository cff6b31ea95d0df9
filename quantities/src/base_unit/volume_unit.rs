/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::VOLUME_UNITS;

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
pub enum VolumeUnit {
    CubicMeter(SiPrefix),
    Liter(SiPrefix),
    Gallon,
    CubicFoot,
    CubicInch,
}

impl Unit for VolumeUnit {
    const QUANTITY: Quantity = Quantity::Volume;
    const LIST: &'static [Self] = &VOLUME_UNITS;
    const REFERENCE: Self = VolumeUnit::CubicMeter(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            VolumeUnit::CubicMeter(p) => format!("{}cubic meter", p.name()),
            VolumeUnit::Liter(p) => format!("{}liter", p.name()),
            VolumeUnit::Gallon => "US gallon".to_string(),
            VolumeUnit::CubicFoot => "cubic foot".to_string(),
            VolumeUnit::CubicInch => "cubic inch".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            VolumeUnit::CubicMeter(p) => p.abbreviations(&["m³", "m3"]),
            VolumeUnit::Liter(p) => p.abbreviations(&["L", "l"]),
            VolumeUnit::Gallon => owned(&["gal"]),
            VolumeUnit::CubicFoot => owned(&["ft³", "ft3"]),
            VolumeUnit::CubicInch => owned(&["in³", "in3"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            VolumeUnit::CubicMeter(p) => p.multiplier().powi(3),
            VolumeUnit::Liter(p) => p.multiplier() / 1000.0,
            VolumeUnit::Gallon => 3.785411784e-3,
            VolumeUnit::CubicFoot => 0.028316846592,
            VolumeUnit::CubicInch => 1.6387064e-5,
        }
    }
}

impl RelativeUnit for VolumeUnit {}

impl Display for VolumeUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            VolumeUnit::CubicMeter(p) => write!(f, "{}m³", p),
            VolumeUnit::Liter(p) => write!(f, "{}L", p),
            VolumeUnit::Gallon => write!(f, "gal"),
            VolumeUnit::CubicFoot => write!(f, "ft³"),
            VolumeUnit::CubicInch => write!(f, "in³"),
        }
    }
}
