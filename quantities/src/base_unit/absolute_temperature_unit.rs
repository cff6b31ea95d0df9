/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, AbsoluteUnit, Unit};
use super::base_units::ABSOLUTE_TEMPERATURE_UNITS;
use super::TemperatureUnit;

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
pub enum AbsoluteTemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl Unit for AbsoluteTemperatureUnit {
    const QUANTITY: Quantity = Quantity::AbsoluteTemperature;
    const LIST: &'static [Self] = &ABSOLUTE_TEMPERATURE_UNITS;
    const REFERENCE: Self = AbsoluteTemperatureUnit::Kelvin;

    fn name(&self) -> String {
        match self {
            AbsoluteTemperatureUnit::Kelvin => "kelvin".to_string(),
            AbsoluteTemperatureUnit::Celsius => "degree Celsius".to_string(),
            AbsoluteTemperatureUnit::Fahrenheit => "degree Fahrenheit".to_string(),
            AbsoluteTemperatureUnit::Rankine => "degree Rankine".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            AbsoluteTemperatureUnit::Kelvin => owned(&["K"]),
            AbsoluteTemperatureUnit::Celsius => owned(&["°C", "degC"]),
            AbsoluteTemperatureUnit::Fahrenheit => owned(&["°F", "degF"]),
            AbsoluteTemperatureUnit::Rankine => owned(&["°R", "degR"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            AbsoluteTemperatureUnit::Kelvin => 1.0,
            AbsoluteTemperatureUnit::Celsius => 1.0,
            AbsoluteTemperatureUnit::Fahrenheit => 5.0 / 9.0,
            AbsoluteTemperatureUnit::Rankine => 5.0 / 9.0,
        }
    }

    fn offset(&self) -> f64 {
        match self {
            AbsoluteTemperatureUnit::Celsius => 273.15,
            AbsoluteTemperatureUnit::Fahrenheit => 459.67 * 5.0 / 9.0,
            _ => 0.0,
        }
    }
}

impl AbsoluteUnit for AbsoluteTemperatureUnit {
    type Relative = TemperatureUnit;

    fn relative(&self) -> TemperatureUnit {
        match self {
            AbsoluteTemperatureUnit::Kelvin => TemperatureUnit::Kelvin,
            AbsoluteTemperatureUnit::Celsius => TemperatureUnit::Celsius,
            AbsoluteTemperatureUnit::Fahrenheit => TemperatureUnit::Fahrenheit,
            AbsoluteTemperatureUnit::Rankine => TemperatureUnit::Rankine,
        }
    }
}

impl Display for AbsoluteTemperatureUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            AbsoluteTemperatureUnit::Kelvin => write!(f, "K"),
            AbsoluteTemperatureUnit::Celsius => write!(f, "°C"),
            AbsoluteTemperatureUnit::Fahrenheit => write!(f, "°F"),
            AbsoluteTemperatureUnit::Rankine => write!(f, "°R"),
        }
    }
}
