/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use quantities::{
    LengthUnit, MoneyUnit, Quantity, QuantityError, QuantityUnits, Registry,
    RelativeUnit, SiPrefix, Unit,
};

#[derive(PartialEq, Clone, Copy, Debug)]
enum ClashingUnit {
    Euro,
    Escudo,
}

impl Unit for ClashingUnit {
    const QUANTITY: Quantity = Quantity::Money;
    const LIST: &'static [Self] = &[ClashingUnit::Euro, ClashingUnit::Escudo];
    const REFERENCE: Self = ClashingUnit::Euro;

    fn name(&self) -> String {
        match self {
            ClashingUnit::Euro => "euro".to_string(),
            ClashingUnit::Escudo => "escudo".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            ClashingUnit::Euro => vec!["EUR".to_string(), "E".to_string()],
            ClashingUnit::Escudo => vec!["PTE".to_string(), "E".to_string()],
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            ClashingUnit::Euro => 1.0,
            ClashingUnit::Escudo => 1.0 / 200.482,
        }
    }
}

impl RelativeUnit for ClashingUnit {}

impl Display for ClashingUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.abbreviations()[0])
    }
}

#[derive(PartialEq, Clone, Copy, Debug)]
enum ScaledReference {
    Cent,
}

impl Unit for ScaledReference {
    const QUANTITY: Quantity = Quantity::Money;
    const LIST: &'static [Self] = &[ScaledReference::Cent];
    const REFERENCE: Self = ScaledReference::Cent;

    fn name(&self) -> String {
        "cent".to_string()
    }

    fn abbreviations(&self) -> Vec<String> {
        vec!["ct".to_string()]
    }

    fn multiplier(&self) -> f64 {
        0.01
    }
}

impl RelativeUnit for ScaledReference {}

impl Display for ScaledReference {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "ct")
    }
}

#[test]
fn duplicate_abbreviation() {
    assert_eq!(
        QuantityUnits::of::<ClashingUnit>().unwrap_err(),
        QuantityError::DuplicateRegistration {
            quantity: Quantity::Money,
            abbreviation: "E".to_string(),
        }
    );
}

#[test]
fn invalid_reference() {
    assert_eq!(
        QuantityUnits::of::<ScaledReference>().unwrap_err(),
        QuantityError::InvalidReference {
            quantity: Quantity::Money,
            unit: "ct".to_string(),
        }
    );
}

#[test]
fn register_twice() {
    let mut registry = Registry::default();
    registry.register::<MoneyUnit>().unwrap();
    assert_eq!(
        registry.register::<MoneyUnit>(),
        Err(QuantityError::AlreadyRegistered(Quantity::Money))
    );
    assert!(registry.units(Quantity::Money).is_some());
    assert!(registry.units(Quantity::Length).is_none());
}

#[test]
fn registry_is_complete() {
    quantities::initialize();
    let registry = Registry::get();
    assert_eq!(registry.quantities().count(), Quantity::LIST.len());
    for quantity in Quantity::LIST {
        let units = quantity.units().unwrap();
        assert_eq!(units.quantity(), *quantity);
        assert_eq!(units.reference().scale, 1.0);
        assert_eq!(units.reference().offset, 0.0);
        assert_eq!(units.reference().quantity, *quantity);
        assert!(!units.units().is_empty());
    }
}

#[test]
fn lookup() {
    let registry = Registry::get();
    assert_eq!(
        registry.resolve::<LengthUnit>("km"),
        Some(LengthUnit::Meter(SiPrefix::Kilo))
    );
    assert_eq!(registry.resolve::<LengthUnit>("KM"), None);
    assert_eq!(registry.resolve::<LengthUnit>("m/s"), None);

    let units = Quantity::Length.units().unwrap();
    assert_eq!(units.reference().abbreviation(), "m");
    assert_eq!(units.resolve("ly").unwrap().name, "light year");
    assert!(units.abbreviations().contains(&"nmi"));
    assert!(units.abbreviations().windows(2).all(|w| w[0] < w[1]));

    let dimensionless = Quantity::Dimensionless.units().unwrap();
    assert_eq!(dimensionless.reference().abbreviation(), "");
    assert!(dimensionless.resolve("").is_none());
}

#[test]
fn unit_info() {
    let info = LengthUnit::Meter(SiPrefix::Kilo).info();
    assert_eq!(info.name, "kilometer");
    assert_eq!(info.abbreviation(), "km");
    assert_eq!(info.scale, 1000.0);
    assert_eq!(info.offset, 0.0);
    assert_eq!(info.quantity, Quantity::Length);
    assert_eq!(info.dimension(), Quantity::Length.dimension());
    assert_eq!(info.to_si(2.0), 2000.0);
    assert_eq!(info.from_si(500.0), 0.5);
}
