/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod base_units;

pub mod absolute_temperature_unit;
pub mod acceleration_unit;
pub mod amount_unit;
pub mod angle_unit;
pub mod angular_velocity_unit;
pub mod area_unit;
pub mod charge_unit;
pub mod conductance_unit;
pub mod current_unit;
pub mod density_unit;
pub mod dimensionless_unit;
pub mod direction_unit;
pub mod duration_unit;
pub mod energy_unit;
pub mod flow_volume_unit;
pub mod force_unit;
pub mod frequency_unit;
pub mod length_unit;
pub mod linear_density_unit;
pub mod luminous_intensity_unit;
pub mod mass_unit;
pub mod money_unit;
pub mod position_unit;
pub mod potential_unit;
pub mod power_unit;
pub mod pressure_unit;
pub mod resistance_unit;
pub mod speed_unit;
pub mod temperature_unit;
pub mod time_unit;
pub mod torque_unit;
pub mod volume_unit;

pub use absolute_temperature_unit::AbsoluteTemperatureUnit;
pub use acceleration_unit::AccelerationUnit;
pub use amount_unit::AmountUnit;
pub use angle_unit::AngleUnit;
pub use angular_velocity_unit::AngularVelocityUnit;
pub use area_unit::AreaUnit;
pub use charge_unit::ChargeUnit;
pub use conductance_unit::ConductanceUnit;
pub use current_unit::CurrentUnit;
pub use density_unit::DensityUnit;
pub use dimensionless_unit::DimensionlessUnit;
pub use direction_unit::DirectionUnit;
pub use duration_unit::DurationUnit;
pub use energy_unit::EnergyUnit;
pub use flow_volume_unit::FlowVolumeUnit;
pub use force_unit::ForceUnit;
pub use frequency_unit::FrequencyUnit;
pub use length_unit::LengthUnit;
pub use linear_density_unit::LinearDensityUnit;
pub use luminous_intensity_unit::LuminousIntensityUnit;
pub use mass_unit::MassUnit;
pub use money_unit::MoneyUnit;
pub use position_unit::PositionUnit;
pub use potential_unit::PotentialUnit;
pub use power_unit::PowerUnit;
pub use pressure_unit::PressureUnit;
pub use resistance_unit::ResistanceUnit;
pub use speed_unit::SpeedUnit;
pub use temperature_unit::TemperatureUnit;
pub use time_unit::{TimeUnit, J2000};
pub use torque_unit::TorqueUnit;
pub use volume_unit::VolumeUnit;
