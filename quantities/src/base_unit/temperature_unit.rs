/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::TEMPERATURE_UNITS;

/// Temperature differences. None of these units has an offset.
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
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl Unit for TemperatureUnit {
    const QUANTITY: Quantity = Quantity::Temperature;
    const LIST: &'static [Self] = &TEMPERATURE_UNITS;
    const REFERENCE: Self = TemperatureUnit::Kelvin;

    fn name(&self) -> String {
        match self {
            TemperatureUnit::Kelvin => "kelvin".to_string(),
            TemperatureUnit::Celsius => "degree Celsius".to_string(),
            TemperatureUnit::Fahrenheit => "degree Fahrenheit".to_string(),
            TemperatureUnit::Rankine => "degree Rankine".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            TemperatureUnit::Kelvin => owned(&["K"]),
            TemperatureUnit::Celsius => owned(&["°C", "degC"]),
            TemperatureUnit::Fahrenheit => owned(&["°F", "degF"]),
            TemperatureUnit::Rankine => owned(&["°R", "degR"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            TemperatureUnit::Kelvin => 1.0,
            TemperatureUnit::Celsius => 1.0,
            TemperatureUnit::Fahrenheit => 5.0 / 9.0,
            TemperatureUnit::Rankine => 5.0 / 9.0,
        }
    }
}

impl RelativeUnit for TemperatureUnit {}

impl Display for TemperatureUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            TemperatureUnit::Kelvin => write!(f, "K"),
            TemperatureUnit::Celsius => write!(f, "°C"),
            TemperatureUnit::Fahrenheit => write!(f, "°F"),
            TemperatureUnit::Rankine => write!(f, "°R"),
        }
    }
}
