/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use quantities::{
    AbsoluteTemperatureUnit, AbsoluteUnit, AccelerationUnit, AmountUnit,
    AngleUnit, AngularVelocityUnit, AreaUnit, ChargeUnit, ConductanceUnit,
    CurrentUnit, DensityUnit, DimensionlessUnit, DirectionUnit, DurationUnit,
    EnergyUnit, FlowVolumeUnit, ForceUnit, FracPrefix, FrequencyUnit,
    LengthUnit, LinearDensityUnit, LuminousIntensityUnit, MassUnit, MoneyUnit,
    PositionUnit, PotentialUnit, PowerUnit, PressureUnit, Relative,
    RelativeUnit, ResistanceUnit, SiPrefix, SpeedUnit, TemperatureUnit,
    TimeUnit, TorqueUnit, Unit, VolumeUnit,
};

const VALUES: [f64; 6] = [0.0, 1.0, -2.5, 0.001, 1234.5678, 6.02e23];

fn assert_close(actual: f64, expected: f64, scale: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * scale.abs().max(1.0),
        "{} != {}",
        actual,
        expected
    );
}

macro_rules! relative_units {
    ($check:ident) => {
        $check::<DimensionlessUnit>();
        $check::<AngleUnit>();
        $check::<LengthUnit>();
        $check::<MassUnit>();
        $check::<DurationUnit>();
        $check::<CurrentUnit>();
        $check::<TemperatureUnit>();
        $check::<AmountUnit>();
        $check::<LuminousIntensityUnit>();
        $check::<MoneyUnit>();
        $check::<LinearDensityUnit>();
        $check::<AreaUnit>();
        $check::<VolumeUnit>();
        $check::<SpeedUnit>();
        $check::<AccelerationUnit>();
        $check::<FrequencyUnit>();
        $check::<AngularVelocityUnit>();
        $check::<ForceUnit>();
        $check::<EnergyUnit>();
        $check::<TorqueUnit>();
        $check::<PowerUnit>();
        $check::<PressureUnit>();
        $check::<DensityUnit>();
        $check::<FlowVolumeUnit>();
        $check::<ChargeUnit>();
        $check::<PotentialUnit>();
        $check::<ResistanceUnit>();
        $check::<ConductanceUnit>();
    };
}

macro_rules! absolute_units {
    ($check:ident) => {
        $check::<DirectionUnit>();
        $check::<PositionUnit>();
        $check::<TimeUnit>();
        $check::<AbsoluteTemperatureUnit>();
    };
}

macro_rules! all_units {
    ($check:ident) => {
        relative_units!($check);
        absolute_units!($check);
    };
}

fn unit_round_trip<U: Unit>() {
    for unit in U::LIST {
        for v in VALUES {
            let si = unit.to_si(v);
            assert_close(unit.from_si(si), v, v.abs().max(si.abs()));
        }
    }
}

fn scalar_round_trip<U: RelativeUnit>() {
    for unit in U::LIST {
        for v in VALUES {
            let s = Relative::new(v, *unit);
            assert_close(s.in_unit(*unit), v, v);
            assert_close(s.value(), v, v);
        }
    }
}

fn canonical_idempotence<U: Unit>() {
    assert!(U::REFERENCE.is_reference());
    assert_eq!(U::REFERENCE.multiplier(), 1.0);
    assert_eq!(U::REFERENCE.offset(), 0.0);
    for v in VALUES {
        assert_eq!(U::REFERENCE.to_si(v), v);
    }
}

fn relative_without_offset<U: RelativeUnit>() {
    for unit in U::LIST {
        assert_eq!(unit.offset(), 0.0, "{:?} has an offset", unit);
    }
}

fn display_matches_abbreviation<U: Unit>() {
    for unit in U::LIST {
        let abbreviations = unit.abbreviations();
        assert_eq!(
            unit.to_string(),
            abbreviations.first().cloned().unwrap_or_default(),
            "{:?}",
            unit
        );
    }
}

/* Same scale and orientation, so that adding a difference moves a
 * point the same way in every unit. */
fn companion_matches_scale<U: AbsoluteUnit>() {
    for unit in U::LIST {
        assert_eq!(
            unit.multiplier(),
            unit.relative().multiplier(),
            "{:?}",
            unit
        );
        assert_eq!(
            U::QUANTITY.companion(),
            Some(<U::Relative as Unit>::QUANTITY)
        );
    }
}

#[test]
fn round_trip() {
    all_units!(unit_round_trip);
    relative_units!(scalar_round_trip);
}

#[test]
fn reference_units_are_canonical() {
    all_units!(canonical_idempotence);
}

#[test]
fn relative_units_have_no_offset() {
    relative_units!(relative_without_offset);
}

#[test]
fn display_is_first_abbreviation() {
    all_units!(display_matches_abbreviation);
}

#[test]
fn absolute_companions() {
    absolute_units!(companion_matches_scale);
}

#[test]
fn prefixed_units() {
    assert_eq!(MassUnit::REFERENCE, MassUnit::Gram(SiPrefix::Kilo));
    assert_eq!(MassUnit::Gram(SiPrefix::Kilo).multiplier(), 1.0);
    assert_eq!(LengthUnit::Meter(SiPrefix::Kilo).to_string(), "km");
    assert_eq!(DurationUnit::Second(FracPrefix::Micro).to_string(), "µs");
    assert_eq!(
        DurationUnit::Second(FracPrefix::Milli).abbreviations(),
        vec!["ms", "msec"]
    );
    assert_eq!(
        AreaUnit::SquareMeter(SiPrefix::Centi).abbreviations(),
        vec!["cm²", "cm2"]
    );
    assert_close(
        VolumeUnit::Liter(SiPrefix::Milli).multiplier(),
        1e-6,
        1e-6,
    );
    assert_close(EnergyUnit::WattHour(SiPrefix::Kilo).multiplier(), 3.6e6, 3.6e6);
}

#[test]
fn localized_abbreviations() {
    assert_eq!(
        DurationUnit::from_abbreviation("u").unwrap(),
        DurationUnit::Hour
    );
    assert_eq!(
        DurationUnit::from_abbreviation("h").unwrap(),
        DurationUnit::Hour
    );
    assert_eq!(
        DurationUnit::from_abbreviation("dag").unwrap(),
        DurationUnit::Day
    );
    assert_eq!(
        SpeedUnit::from_abbreviation("km/u").unwrap(),
        SpeedUnit::KilometerPerHour
    );
    assert_eq!(
        DurationUnit::from_abbreviation("us").unwrap(),
        DurationUnit::from_abbreviation("µs").unwrap()
    );
    assert_eq!(
        ResistanceUnit::from_abbreviation("kohm").unwrap(),
        ResistanceUnit::from_abbreviation("kΩ").unwrap()
    );
}

#[test]
fn affine_units() {
    assert_close(
        AbsoluteTemperatureUnit::Fahrenheit.to_si(32.0),
        273.15,
        273.15,
    );
    assert_close(
        AbsoluteTemperatureUnit::Celsius.convert(
            &AbsoluteTemperatureUnit::Fahrenheit,
            100.0,
        ),
        212.0,
        212.0,
    );
    assert_close(
        DirectionUnit::NorthDegree.to_si(90.0),
        std::f64::consts::PI,
        1.0,
    );
    assert_close(
        DirectionUnit::NorthDegree.convert(&DirectionUnit::EastDegree, 0.0),
        90.0,
        90.0,
    );
    assert_eq!(TimeUnit::J2000Second.to_si(0.0), quantities::J2000);
}
