/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::{BTreeMap, HashMap};

use log::{debug, info};

use super::base_unit::{
    AbsoluteTemperatureUnit, AccelerationUnit, AmountUnit, AngleUnit,
    AngularVelocityUnit, AreaUnit, ChargeUnit, ConductanceUnit, CurrentUnit,
    DensityUnit, DimensionlessUnit, DirectionUnit, DurationUnit, EnergyUnit,
    FlowVolumeUnit, ForceUnit, FrequencyUnit, LengthUnit, LinearDensityUnit,
    LuminousIntensityUnit, MassUnit, MoneyUnit, PositionUnit, PotentialUnit,
    PowerUnit, PressureUnit, ResistanceUnit, SpeedUnit, TemperatureUnit,
    TimeUnit, TorqueUnit, VolumeUnit,
};
use super::error::QuantityError;
use super::quantity::Quantity;
use super::unit::{Unit, UnitInfo};

lazy_static::lazy_static! {
    static ref REGISTRY: Registry = match Registry::build() {
        Ok(registry) => registry,
        Err(e) => panic!("failed to build the unit registry: {}", e),
    };
}

/// Build the process-wide registry now rather than on first use.
pub fn initialize() {
    lazy_static::initialize(&REGISTRY);
}

/// The units of one quantity, indexed by abbreviation. Indices
/// refer to positions in the unit type's `LIST`.
#[derive(Debug)]
pub struct QuantityUnits {
    quantity: Quantity,
    reference: usize,
    units: Vec<UnitInfo>,
    abbreviations: HashMap<String, usize>,
}

impl QuantityUnits {
    /// Collect the units of `U`, rejecting duplicate abbreviations
    /// and reference units that are not the identity transform.
    pub fn of<U: Unit>() -> Result<Self, QuantityError> {
        let units = U::LIST.iter().map(|u| u.info()).collect::<Vec<_>>();

        let reference = U::LIST
            .iter()
            .position(|u| *u == U::REFERENCE)
            .filter(|i| units[*i].scale == 1.0 && units[*i].offset == 0.0)
            .ok_or_else(|| QuantityError::InvalidReference {
                quantity: U::QUANTITY,
                unit: U::REFERENCE.to_string(),
            })?;

        let mut abbreviations = HashMap::new();
        for (i, unit) in units.iter().enumerate() {
            for abbreviation in &unit.abbreviations {
                if abbreviation.is_empty() {
                    continue;
                }
                if abbreviations.insert(abbreviation.clone(), i).is_some() {
                    return Err(QuantityError::DuplicateRegistration {
                        quantity: U::QUANTITY,
                        abbreviation: abbreviation.clone(),
                    });
                }
            }
        }

        Ok(Self {
            quantity: U::QUANTITY,
            reference,
            units,
            abbreviations,
        })
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn reference(&self) -> &UnitInfo {
        &self.units[self.reference]
    }

    pub fn units(&self) -> &[UnitInfo] {
        &self.units
    }

    /// All registered abbreviations, sorted.
    pub fn abbreviations(&self) -> Vec<&str> {
        let mut r = self
            .abbreviations
            .keys()
            .map(|a| a.as_str())
            .collect::<Vec<_>>();
        r.sort_unstable();
        r
    }

    pub fn index_of(&self, abbreviation: &str) -> Option<usize> {
        self.abbreviations.get(abbreviation).copied()
    }

    pub fn resolve(&self, abbreviation: &str) -> Option<&UnitInfo> {
        self.index_of(abbreviation).map(|i| &self.units[i])
    }
}

/// Units of every named quantity.
#[derive(Default, Debug)]
pub struct Registry {
    quantities: BTreeMap<Quantity, QuantityUnits>,
}

impl Registry {
    /// The process-wide registry.
    pub fn get() -> &'static Registry {
        &REGISTRY
    }

    pub fn build() -> Result<Self, QuantityError> {
        let mut registry = Self::default();

        registry.register::<DimensionlessUnit>()?;
        registry.register::<AngleUnit>()?;
        registry.register::<DirectionUnit>()?;
        registry.register::<LengthUnit>()?;
        registry.register::<PositionUnit>()?;
        registry.register::<MassUnit>()?;
        registry.register::<DurationUnit>()?;
        registry.register::<TimeUnit>()?;
        registry.register::<CurrentUnit>()?;
        registry.register::<TemperatureUnit>()?;
        registry.register::<AbsoluteTemperatureUnit>()?;
        registry.register::<AmountUnit>()?;
        registry.register::<LuminousIntensityUnit>()?;
        registry.register::<MoneyUnit>()?;
        registry.register::<LinearDensityUnit>()?;
        registry.register::<AreaUnit>()?;
        registry.register::<VolumeUnit>()?;
        registry.register::<SpeedUnit>()?;
        registry.register::<AccelerationUnit>()?;
        registry.register::<FrequencyUnit>()?;
        registry.register::<AngularVelocityUnit>()?;
        registry.register::<ForceUnit>()?;
        registry.register::<EnergyUnit>()?;
        registry.register::<TorqueUnit>()?;
        registry.register::<PowerUnit>()?;
        registry.register::<PressureUnit>()?;
        registry.register::<DensityUnit>()?;
        registry.register::<FlowVolumeUnit>()?;
        registry.register::<ChargeUnit>()?;
        registry.register::<PotentialUnit>()?;
        registry.register::<ResistanceUnit>()?;
        registry.register::<ConductanceUnit>()?;

        info!(
            "unit registry ready: {} quantities, {} units",
            registry.quantities.len(),
            registry
                .quantities
                .values()
                .map(|q| q.units.len())
                .sum::<usize>()
        );
        Ok(registry)
    }

    pub fn register<U: Unit>(&mut self) -> Result<(), QuantityError> {
        if self.quantities.contains_key(&U::QUANTITY) {
            return Err(QuantityError::AlreadyRegistered(U::QUANTITY));
        }
        let units = QuantityUnits::of::<U>()?;
        debug!(
            "registered {} units ({} abbreviations) for {}",
            units.units.len(),
            units.abbreviations.len(),
            U::QUANTITY
        );
        self.quantities.insert(U::QUANTITY, units);
        Ok(())
    }

    pub fn units(&self, quantity: Quantity) -> Option<&QuantityUnits> {
        self.quantities.get(&quantity)
    }

    /// Typed lookup of a unit by abbreviation.
    pub fn resolve<U: Unit>(&self, abbreviation: &str) -> Option<U> {
        self.units(U::QUANTITY)?
            .index_of(abbreviation)
            .and_then(|i| U::LIST.get(i))
            .copied()
    }

    pub fn quantities(&self) -> impl Iterator<Item = &QuantityUnits> {
        self.quantities.values()
    }
}
