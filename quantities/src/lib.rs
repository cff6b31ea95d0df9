/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod base_unit;
pub mod closure;
pub mod dimension;
pub mod error;
pub mod parser;
pub mod prefix;
pub mod quantity;
pub mod registry;
pub mod scalar;
pub mod unit;

pub use base_unit::{
    AbsoluteTemperatureUnit, AccelerationUnit, AmountUnit, AngleUnit,
    AngularVelocityUnit, AreaUnit, ChargeUnit, ConductanceUnit, CurrentUnit,
    DensityUnit, DimensionlessUnit, DirectionUnit, DurationUnit, EnergyUnit,
    FlowVolumeUnit, ForceUnit, FrequencyUnit, LengthUnit, LinearDensityUnit,
    LuminousIntensityUnit, MassUnit, MoneyUnit, PositionUnit, PotentialUnit,
    PowerUnit, PressureUnit, ResistanceUnit, SpeedUnit, TemperatureUnit,
    TimeUnit, TorqueUnit, VolumeUnit, J2000,
};
pub use closure::{Closure, Operator, Reciprocal, CLOSURES};
pub use dimension::{BaseDimension, Dimension};
pub use error::{ParseFailure, QuantityError};
pub use quantity::{Kind, Quantity};
pub use registry::{initialize, QuantityUnits, Registry};
pub use scalar::{
    Absolute, AbsoluteTemperature, Acceleration, AmountOfSubstance, Angle,
    AngularVelocity, Area, Density, Dimensionless, Direction, Duration,
    ElectricalCharge, ElectricalConductance, ElectricalCurrent,
    ElectricalPotential, ElectricalResistance, Energy, FlowVolume, Force,
    Frequency, Length, LinearDensity, LuminousIntensity, Mass, Money,
    Position, Power, Pressure, Relative, SIScalar, Scalar, Speed,
    Temperature, Time, Torque, Volume,
};
pub use unit::{AbsoluteUnit, RelativeUnit, Unit, UnitInfo};

pub use prefix::{FracPrefix, Prefix, SiPrefix};
