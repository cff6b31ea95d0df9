/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::FLOW_VOLUME_UNITS;

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
pub enum FlowVolumeUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    LiterPerMinute,
    LiterPerHour,
    GallonPerMinute,
}

impl Unit for FlowVolumeUnit {
    const QUANTITY: Quantity = Quantity::FlowVolume;
    const LIST: &'static [Self] = &FLOW_VOLUME_UNITS;
    const REFERENCE: Self = FlowVolumeUnit::CubicMeterPerSecond;

    fn name(&self) -> String {
        match self {
            FlowVolumeUnit::CubicMeterPerSecond => "cubic meter per second".to_string(),
            FlowVolumeUnit::CubicMeterPerHour => "cubic meter per hour".to_string(),
            FlowVolumeUnit::LiterPerSecond => "liter per second".to_string(),
            FlowVolumeUnit::LiterPerMinute => "liter per minute".to_string(),
            FlowVolumeUnit::LiterPerHour => "liter per hour".to_string(),
            FlowVolumeUnit::GallonPerMinute => "US gallon per minute".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            FlowVolumeUnit::CubicMeterPerSecond => owned(&["m³/s", "m3/s"]),
            FlowVolumeUnit::CubicMeterPerHour => owned(&["m³/h", "m3/h"]),
            FlowVolumeUnit::LiterPerSecond => owned(&["L/s", "l/s"]),
            FlowVolumeUnit::LiterPerMinute => owned(&["L/min", "l/min"]),
            FlowVolumeUnit::LiterPerHour => owned(&["L/h", "l/h"]),
            FlowVolumeUnit::GallonPerMinute => owned(&["gal/min", "gpm"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            FlowVolumeUnit::CubicMeterPerSecond => 1.0,
            FlowVolumeUnit::CubicMeterPerHour => 1.0 / 3600.0,
            FlowVolumeUnit::LiterPerSecond => 1e-3,
            FlowVolumeUnit::LiterPerMinute => 1e-3 / 60.0,
            FlowVolumeUnit::LiterPerHour => 1e-3 / 3600.0,
            FlowVolumeUnit::GallonPerMinute => 3.785411784e-3 / 60.0,
        }
    }
}

impl RelativeUnit for FlowVolumeUnit {}

impl Display for FlowVolumeUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            FlowVolumeUnit::CubicMeterPerSecond => write!(f, "m³/s"),
            FlowVolumeUnit::CubicMeterPerHour => write!(f, "m³/h"),
            FlowVolumeUnit::LiterPerSecond => write!(f, "L/s"),
            FlowVolumeUnit::LiterPerMinute => write!(f, "L/min"),
            FlowVolumeUnit::LiterPerHour => write!(f, "L/h"),
            FlowVolumeUnit::GallonPerMinute => write!(f, "gal/min"),
        }
    }
}
