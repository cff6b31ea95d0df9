/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::error::QuantityError;
use super::registry::{QuantityUnits, Registry};

/// Named quantities. Every quantity has its own unit type and
/// exactly one reference unit in which scalar values are stored.
///
/// Several relative quantities may share a dimension (eg. energy
/// and torque). Dimension lookup prefers the one declared first.
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
pub enum Quantity {
    /* Dimensionless. */
    Dimensionless,
    Angle,
    Direction,

    /* Base quantities. */
    Length,
    Position,
    Mass,
    Duration,
    Time,
    ElectricalCurrent,
    Temperature,
    AbsoluteTemperature,
    AmountOfSubstance,
    LuminousIntensity,
    Money,

    /* Derived quantities. */
    LinearDensity,
    Area,
    Volume,
    Speed,
    Acceleration,
    Frequency,
    AngularVelocity,
    Force,
    Energy,
    Torque,
    Power,
    Pressure,
    Density,
    FlowVolume,
    ElectricalCharge,
    ElectricalPotential,
    ElectricalResistance,
    ElectricalConductance,
}

/// Whether values are points on a scale or magnitudes.
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
pub enum Kind {
    Relative,
    Absolute,
}

pub(crate) static QUANTITIES: [Quantity; 32] = [
    Quantity::Dimensionless,
    Quantity::Angle,
    Quantity::Direction,
    Quantity::Length,
    Quantity::Position,
    Quantity::Mass,
    Quantity::Duration,
    Quantity::Time,
    Quantity::ElectricalCurrent,
    Quantity::Temperature,
    Quantity::AbsoluteTemperature,
    Quantity::AmountOfSubstance,
    Quantity::LuminousIntensity,
    Quantity::Money,
    Quantity::LinearDensity,
    Quantity::Area,
    Quantity::Volume,
    Quantity::Speed,
    Quantity::Acceleration,
    Quantity::Frequency,
    Quantity::AngularVelocity,
    Quantity::Force,
    Quantity::Energy,
    Quantity::Torque,
    Quantity::Power,
    Quantity::Pressure,
    Quantity::Density,
    Quantity::FlowVolume,
    Quantity::ElectricalCharge,
    Quantity::ElectricalPotential,
    Quantity::ElectricalResistance,
    Quantity::ElectricalConductance,
];

impl Quantity {
    pub const LIST: &'static [Self] = &QUANTITIES;

    pub const fn name(&self) -> &'static str {
        match self {
            Quantity::Dimensionless => "dimensionless",
            Quantity::Angle => "angle",
            Quantity::Direction => "direction",
            Quantity::Length => "length",
            Quantity::Position => "position",
            Quantity::Mass => "mass",
            Quantity::Duration => "duration",
            Quantity::Time => "time",
            Quantity::ElectricalCurrent => "electrical current",
            Quantity::Temperature => "temperature",
            Quantity::AbsoluteTemperature => "absolute temperature",
            Quantity::AmountOfSubstance => "amount of substance",
            Quantity::LuminousIntensity => "luminous intensity",
            Quantity::Money => "money",
            Quantity::LinearDensity => "linear density",
            Quantity::Area => "area",
            Quantity::Volume => "volume",
            Quantity::Speed => "speed",
            Quantity::Acceleration => "acceleration",
            Quantity::Frequency => "frequency",
            Quantity::AngularVelocity => "angular velocity",
            Quantity::Force => "force",
            Quantity::Energy => "energy",
            Quantity::Torque => "torque",
            Quantity::Power => "power",
            Quantity::Pressure => "pressure",
            Quantity::Density => "density",
            Quantity::FlowVolume => "flow volume",
            Quantity::ElectricalCharge => "electrical charge",
            Quantity::ElectricalPotential => "electrical potential",
            Quantity::ElectricalResistance => "electrical resistance",
            Quantity::ElectricalConductance => "electrical conductance",
        }
    }

    /* Exponents in [L, M, T, I, Θ, N, J, ¤] order. */
    pub const fn dimension(&self) -> Dimension {
        match self {
            Quantity::Dimensionless | Quantity::Angle | Quantity::Direction => {
                Dimension::DIMENSIONLESS
            }
            Quantity::Length | Quantity::Position => Dimension::LENGTH,
            Quantity::Mass => Dimension::MASS,
            Quantity::Duration | Quantity::Time => Dimension::TIME,
            Quantity::ElectricalCurrent => Dimension::CURRENT,
            Quantity::Temperature | Quantity::AbsoluteTemperature => {
                Dimension::TEMPERATURE
            }
            Quantity::AmountOfSubstance => Dimension::AMOUNT,
            Quantity::LuminousIntensity => Dimension::LUMINOUS_INTENSITY,
            Quantity::Money => Dimension::MONEY,
            Quantity::LinearDensity => {
                Dimension::new([-1, 0, 0, 0, 0, 0, 0, 0])
            }
            Quantity::Area => Dimension::new([2, 0, 0, 0, 0, 0, 0, 0]),
            Quantity::Volume => Dimension::new([3, 0, 0, 0, 0, 0, 0, 0]),
            Quantity::Speed => Dimension::new([1, 0, -1, 0, 0, 0, 0, 0]),
            Quantity::Acceleration => {
                Dimension::new([1, 0, -2, 0, 0, 0, 0, 0])
            }
            Quantity::Frequency | Quantity::AngularVelocity => {
                Dimension::new([0, 0, -1, 0, 0, 0, 0, 0])
            }
            Quantity::Force => Dimension::new([1, 1, -2, 0, 0, 0, 0, 0]),
            Quantity::Energy | Quantity::Torque => {
                Dimension::new([2, 1, -2, 0, 0, 0, 0, 0])
            }
            Quantity::Power => Dimension::new([2, 1, -3, 0, 0, 0, 0, 0]),
            Quantity::Pressure => Dimension::new([-1, 1, -2, 0, 0, 0, 0, 0]),
            Quantity::Density => Dimension::new([-3, 1, 0, 0, 0, 0, 0, 0]),
            Quantity::FlowVolume => Dimension::new([3, 0, -1, 0, 0, 0, 0, 0]),
            Quantity::ElectricalCharge => {
                Dimension::new([0, 0, 1, 1, 0, 0, 0, 0])
            }
            Quantity::ElectricalPotential => {
                Dimension::new([2, 1, -3, -1, 0, 0, 0, 0])
            }
            Quantity::ElectricalResistance => {
                Dimension::new([2, 1, -3, -2, 0, 0, 0, 0])
            }
            Quantity::ElectricalConductance => {
                Dimension::new([-2, -1, 3, 2, 0, 0, 0, 0])
            }
        }
    }

    pub const fn kind(&self) -> Kind {
        match self {
            Quantity::Direction
            | Quantity::Position
            | Quantity::Time
            | Quantity::AbsoluteTemperature => Kind::Absolute,
            _ => Kind::Relative,
        }
    }

    pub const fn is_absolute(&self) -> bool {
        matches!(self.kind(), Kind::Absolute)
    }

    /// The relative quantity measuring differences between points
    /// of an absolute quantity, and vice versa.
    pub const fn companion(&self) -> Option<Quantity> {
        match self {
            Quantity::Direction => Some(Quantity::Angle),
            Quantity::Angle => Some(Quantity::Direction),
            Quantity::Position => Some(Quantity::Length),
            Quantity::Length => Some(Quantity::Position),
            Quantity::Time => Some(Quantity::Duration),
            Quantity::Duration => Some(Quantity::Time),
            Quantity::AbsoluteTemperature => Some(Quantity::Temperature),
            Quantity::Temperature => Some(Quantity::AbsoluteTemperature),
            _ => None,
        }
    }

    /// The preferred relative quantity with the given dimension.
    pub fn from_dimension(dimension: Dimension) -> Option<Quantity> {
        Self::LIST
            .iter()
            .find(|q| !q.is_absolute() && q.dimension() == dimension)
            .copied()
    }

    /// Registered units of this quantity.
    pub fn units(&self) -> Option<&'static QuantityUnits> {
        Registry::get().units(*self)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

/* Accepts the display name, with spaces, underscores or dashes
 * between words, in any case. */
impl FromStr for Quantity {
    type Err = QuantityError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace(['_', '-'], " ");
        Self::LIST
            .iter()
            .find(|q| {
                q.name() == name || q.name().replace(' ', "") == name
            })
            .copied()
            .ok_or_else(|| {
                QuantityError::InvalidArgument(format!("unknown quantity: {}", s))
            })
    }
}
