/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{RelativeUnit, Unit};
use super::base_units::LINEAR_DENSITY_UNITS;

/// Counts per unit of length (reciprocal length), eg. a wave number
/// or the number of turns of a coil per meter.
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
pub enum LinearDensityUnit {
    PerMeter(SiPrefix),
    PerInch,
    PerFoot,
}

impl LinearDensityUnit {
    fn per<S: AsRef<str>>(symbols: &[S]) -> Vec<String> {
        symbols
            .iter()
            .flat_map(|s| {
                let s = s.as_ref();
                [format!("/{}", s), format!("1/{}", s)]
            })
            .collect()
    }
}

impl Unit for LinearDensityUnit {
    const QUANTITY: Quantity = Quantity::LinearDensity;
    const LIST: &'static [Self] = &LINEAR_DENSITY_UNITS;
    const REFERENCE: Self = LinearDensityUnit::PerMeter(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            LinearDensityUnit::PerMeter(p) => format!("per {}meter", p.name()),
            LinearDensityUnit::PerInch => "per inch".to_string(),
            LinearDensityUnit::PerFoot => "per foot".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            LinearDensityUnit::PerMeter(p) => {
                Self::per(&p.abbreviations(&["m"]))
            }
            LinearDensityUnit::PerInch => Self::per(&["in"]),
            LinearDensityUnit::PerFoot => Self::per(&["ft"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            LinearDensityUnit::PerMeter(p) => 1.0 / p.multiplier(),
            LinearDensityUnit::PerInch => 1.0 / 0.0254,
            LinearDensityUnit::PerFoot => 1.0 / 0.3048,
        }
    }
}

impl RelativeUnit for LinearDensityUnit {}

impl Display for LinearDensityUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            LinearDensityUnit::PerMeter(p) => write!(f, "/{}m", p),
            LinearDensityUnit::PerInch => write!(f, "/in"),
            LinearDensityUnit::PerFoot => write!(f, "/ft"),
        }
    }
}
