/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::DIMENSIONLESS_UNITS;

/// Units of pure numbers. The reference unit has no abbreviation.
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
pub enum DimensionlessUnit {
    One,
    Percent,
    Permille,
    PartsPerMillion,
    PartsPerBillion,
}

impl Unit for DimensionlessUnit {
    const QUANTITY: Quantity = Quantity::Dimensionless;
    const LIST: &'static [Self] = &DIMENSIONLESS_UNITS;
    const REFERENCE: Self = DimensionlessUnit::One;

    fn name(&self) -> String {
        match self {
            DimensionlessUnit::One => "one".to_string(),
            DimensionlessUnit::Percent => "percent".to_string(),
            DimensionlessUnit::Permille => "permille".to_string(),
            DimensionlessUnit::PartsPerMillion => "parts per million".to_string(),
            DimensionlessUnit::PartsPerBillion => "parts per billion".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            DimensionlessUnit::One => Vec::new(),
            DimensionlessUnit::Percent => owned(&["%"]),
            DimensionlessUnit::Permille => owned(&["‰"]),
            DimensionlessUnit::PartsPerMillion => owned(&["ppm"]),
            DimensionlessUnit::PartsPerBillion => owned(&["ppb"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            DimensionlessUnit::One => 1.0,
            DimensionlessUnit::Percent => 0.01,
            DimensionlessUnit::Permille => 0.001,
            DimensionlessUnit::PartsPerMillion => 1e-6,
            DimensionlessUnit::PartsPerBillion => 1e-9,
        }
    }
}

impl RelativeUnit for DimensionlessUnit {}

impl Display for DimensionlessUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            DimensionlessUnit::One => write!(f, ""),
            DimensionlessUnit::Percent => write!(f, "%"),
            DimensionlessUnit::Permille => write!(f, "‰"),
            DimensionlessUnit::PartsPerMillion => write!(f, "ppm"),
            DimensionlessUnit::PartsPerBillion => write!(f, "ppb"),
        }
    }
}
