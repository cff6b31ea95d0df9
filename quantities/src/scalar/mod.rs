/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod absolute;
pub mod relative;
pub mod si;

use std::fmt::{self, Display, Formatter};

pub use absolute::Absolute;
pub use relative::Relative;
pub use si::SIScalar;

use super::base_unit::{
    AbsoluteTemperatureUnit, AccelerationUnit, AmountUnit, AngleUnit,
    AngularVelocityUnit, AreaUnit, ChargeUnit, ConductanceUnit, CurrentUnit,
    DensityUnit, DimensionlessUnit, DirectionUnit, DurationUnit, EnergyUnit,
    FlowVolumeUnit, ForceUnit, FrequencyUnit, LengthUnit, LinearDensityUnit,
    LuminousIntensityUnit, MassUnit, MoneyUnit, PositionUnit, PotentialUnit,
    PowerUnit, PressureUnit, ResistanceUnit, SpeedUnit, TemperatureUnit,
    TimeUnit, TorqueUnit, VolumeUnit,
};
use super::dimension::Dimension;

/// Anything with a canonical (SI) value and a dimension. Products,
/// quotients and reciprocals that are not covered by a named
/// closure fall back to an `SIScalar`.
///
/// Only differences and `SIScalar` implement it: points (`Absolute`)
/// have an offset origin, so they cannot be multiplied or inverted.
/// Convert a point with `SIScalar::from` to get its value in the
/// reference unit.
///
/// ```compile_fail
/// use quantities::{Scalar, Time};
/// Time::ZERO.reciprocal();
/// ```
pub trait Scalar {
    fn si(&self) -> f64;
    fn dimension(&self) -> Dimension;

    fn to_si_scalar(&self) -> SIScalar {
        SIScalar::new(self.si(), self.dimension())
    }

    fn times<S: Scalar>(&self, other: &S) -> SIScalar {
        SIScalar::new(
            self.si() * other.si(),
            self.dimension() * other.dimension(),
        )
    }

    fn divide<S: Scalar>(&self, other: &S) -> SIScalar {
        SIScalar::new(
            self.si() / other.si(),
            self.dimension() / other.dimension(),
        )
    }

    fn reciprocal(&self) -> SIScalar {
        SIScalar::new(1.0 / self.si(), self.dimension().inverse())
    }
}

pub type Dimensionless = Relative<DimensionlessUnit>;
pub type Angle = Relative<AngleUnit>;
pub type Direction = Absolute<DirectionUnit>;
pub type Length = Relative<LengthUnit>;
pub type Position = Absolute<PositionUnit>;
pub type Mass = Relative<MassUnit>;
pub type Duration = Relative<DurationUnit>;
pub type Time = Absolute<TimeUnit>;
pub type ElectricalCurrent = Relative<CurrentUnit>;
pub type Temperature = Relative<TemperatureUnit>;
pub type AbsoluteTemperature = Absolute<AbsoluteTemperatureUnit>;
pub type AmountOfSubstance = Relative<AmountUnit>;
pub type LuminousIntensity = Relative<LuminousIntensityUnit>;
pub type Money = Relative<MoneyUnit>;
pub type LinearDensity = Relative<LinearDensityUnit>;
pub type Area = Relative<AreaUnit>;
pub type Volume = Relative<VolumeUnit>;
pub type Speed = Relative<SpeedUnit>;
pub type Acceleration = Relative<AccelerationUnit>;
pub type Frequency = Relative<FrequencyUnit>;
pub type AngularVelocity = Relative<AngularVelocityUnit>;
pub type Force = Relative<ForceUnit>;
pub type Energy = Relative<EnergyUnit>;
pub type Torque = Relative<TorqueUnit>;
pub type Power = Relative<PowerUnit>;
pub type Pressure = Relative<PressureUnit>;
pub type Density = Relative<DensityUnit>;
pub type FlowVolume = Relative<FlowVolumeUnit>;
pub type ElectricalCharge = Relative<ChargeUnit>;
pub type ElectricalPotential = Relative<PotentialUnit>;
pub type ElectricalResistance = Relative<ResistanceUnit>;
pub type ElectricalConductance = Relative<ConductanceUnit>;

/* Value in the display unit, honoring the requested precision,
 * followed by the unit's display abbreviation (if any). */
pub(crate) fn fmt_scalar(
    f: &mut Formatter,
    value: f64,
    unit: &dyn Display,
) -> Result<(), fmt::Error> {
    match f.precision() {
        Some(p) => write!(f, "{:.*}", p, value)?,
        None => write!(f, "{}", value)?,
    }
    let unit = unit.to_string();
    if !unit.is_empty() {
        write!(f, " {}", unit)?;
    }
    Ok(())
}
