/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{Prefix, SiPrefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::ENERGY_UNITS;

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
pub enum EnergyUnit {
    Joule(SiPrefix),
    WattHour(SiPrefix),
    Calorie,
    Kilocalorie,
    ElectronVolt,
    BritishThermalUnit,
}

impl Unit for EnergyUnit {
    const QUANTITY: Quantity = Quantity::Energy;
    const LIST: &'static [Self] = &ENERGY_UNITS;
    const REFERENCE: Self = EnergyUnit::Joule(SiPrefix::Unit);

    fn name(&self) -> String {
        match self {
            EnergyUnit::Joule(p) => format!("{}joule", p.name()),
            EnergyUnit::WattHour(p) => format!("{}watt-hour", p.name()),
            EnergyUnit::Calorie => "calorie".to_string(),
            EnergyUnit::Kilocalorie => "kilocalorie".to_string(),
            EnergyUnit::ElectronVolt => "electronvolt".to_string(),
            EnergyUnit::BritishThermalUnit => "British thermal unit".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            EnergyUnit::Joule(p) => p.abbreviations(&["J"]),
            EnergyUnit::WattHour(p) => p.abbreviations(&["Wh"]),
            EnergyUnit::Calorie => owned(&["cal"]),
            EnergyUnit::Kilocalorie => owned(&["kcal"]),
            EnergyUnit::ElectronVolt => owned(&["eV"]),
            EnergyUnit::BritishThermalUnit => owned(&["BTU", "Btu"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            EnergyUnit::Joule(p) => p.multiplier(),
            EnergyUnit::WattHour(p) => p.multiplier() * 3600.0,
            EnergyUnit::Calorie => 4.184,
            EnergyUnit::Kilocalorie => 4184.0,
            EnergyUnit::ElectronVolt => 1.602176634e-19,
            EnergyUnit::BritishThermalUnit => 1055.05585262,
        }
    }
}

impl RelativeUnit for EnergyUnit {}

impl Display for EnergyUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            EnergyUnit::Joule(p) => write!(f, "{}J", p),
            EnergyUnit::WattHour(p) => write!(f, "{}Wh", p),
            EnergyUnit::Calorie => write!(f, "cal"),
            EnergyUnit::Kilocalorie => write!(f, "kcal"),
            EnergyUnit::ElectronVolt => write!(f, "eV"),
            EnergyUnit::BritishThermalUnit => write!(f, "BTU"),
        }
    }
}
