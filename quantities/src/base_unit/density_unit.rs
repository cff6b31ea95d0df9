/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::DENSITY_UNITS;

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
pub enum DensityUnit {
    KilogramPerCubicMeter,
    GramPerCubicCentimeter,
    GramPerLiter,
    KilogramPerLiter,
}

impl Unit for DensityUnit {
    const QUANTITY: Quantity = Quantity::Density;
    const LIST: &'static [Self] = &DENSITY_UNITS;
    const REFERENCE: Self = DensityUnit::KilogramPerCubicMeter;

    fn name(&self) -> String {
        match self {
            DensityUnit::KilogramPerCubicMeter => "kilogram per cubic meter".to_string(),
            DensityUnit::GramPerCubicCentimeter => "gram per cubic centimeter".to_string(),
            DensityUnit::GramPerLiter => "gram per liter".to_string(),
            DensityUnit::KilogramPerLiter => "kilogram per liter".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            DensityUnit::KilogramPerCubicMeter => owned(&["kg/m³", "kg/m3"]),
            DensityUnit::GramPerCubicCentimeter => owned(&["g/cm³", "g/cm3"]),
            DensityUnit::GramPerLiter => owned(&["g/L", "g/l"]),
            DensityUnit::KilogramPerLiter => owned(&["kg/L", "kg/l"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            DensityUnit::KilogramPerCubicMeter => 1.0,
            DensityUnit::GramPerCubicCentimeter => 1000.0,
            DensityUnit::GramPerLiter => 1.0,
            DensityUnit::KilogramPerLiter => 1000.0,
        }
    }
}

impl RelativeUnit for DensityUnit {}

impl Display for DensityUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            DensityUnit::KilogramPerCubicMeter => write!(f, "kg/m³"),
            DensityUnit::GramPerCubicCentimeter => write!(f, "g/cm³"),
            DensityUnit::GramPerLiter => write!(f, "g/L"),
            DensityUnit::KilogramPerLiter => write!(f, "kg/L"),
        }
    }
}
