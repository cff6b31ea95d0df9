/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::str::FromStr;

use quantities::parser::{decimal_value, parse_scalar_info, parse_unit_info};
use quantities::{
    AbsoluteTemperature, AbsoluteTemperatureUnit, Dimensionless,
    DimensionlessUnit, Duration, DurationUnit, Energy, Length, LengthUnit, ParseFailure, Pressure,
    Quantity, QuantityError, SiPrefix, Speed, SpeedUnit, Time, TimeUnit,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "{} != {}",
        actual,
        expected
    );
}

#[test]
fn parse_speed() {
    let s = Speed::parse("12.3 m/s").unwrap();
    assert_eq!(s.si(), 12.3);
    assert_eq!(s.unit(), SpeedUnit::MeterPerSecond);

    let s = Speed::parse("100 km/h").unwrap();
    assert_close(s.si(), 27.777777777777777);
    assert_eq!(s.unit(), SpeedUnit::KilometerPerHour);
    assert_close(s.value(), 100.0);
}

#[test]
fn parse_empty() {
    assert!(matches!(
        Speed::parse(""),
        Err(QuantityError::InvalidArgument(_))
    ));
    assert!(matches!(
        Speed::parse("   "),
        Err(QuantityError::InvalidArgument(_))
    ));
}

#[test]
fn parse_unknown_unit() {
    let err = Length::parse("5 lightyears").unwrap_err();
    assert_eq!(
        err,
        QuantityError::Parse {
            quantity: Quantity::Length,
            text: "5 lightyears".to_string(),
            reason: ParseFailure::UnknownUnit("lightyears".to_string()),
        }
    );
    assert!(err.to_string().contains("lightyears"));
    assert!(err.to_string().contains("length"));
}

#[test]
fn parse_missing_parts() {
    assert!(matches!(
        Length::parse("5"),
        Err(QuantityError::Parse {
            reason: ParseFailure::MissingUnit,
            ..
        })
    ));
    assert!(matches!(
        Length::parse("abc m"),
        Err(QuantityError::Parse {
            reason: ParseFailure::Number,
            ..
        })
    ));
    assert!(matches!(
        parse_scalar_info(Quantity::Speed, "5"),
        Err(QuantityError::Parse {
            reason: ParseFailure::MissingUnit,
            ..
        })
    ));
}

#[test]
fn parse_bare_dimensionless() {
    let x = Dimensionless::parse("5").unwrap();
    assert_eq!(x.value(), 5.0);
    assert_eq!(x.unit(), DimensionlessUnit::One);
    assert_eq!(Dimensionless::parse(" -0,5 ").unwrap().si(), -0.5);
    assert_eq!(Dimensionless::parse("5 %").unwrap().si(), 0.05);

    let (value, unit) =
        parse_scalar_info(Quantity::Dimensionless, "2.5").unwrap();
    assert_eq!(value, 2.5);
    assert_eq!(unit.name, "one");
}

#[test]
fn parse_numbers() {
    assert_close(Length::parse("1,5 km").unwrap().si(), 1500.0);
    assert_close(Length::parse("1.5e3 m").unwrap().si(), 1500.0);
    assert_close(Length::parse("2E-3 km").unwrap().si(), 2.0);
    assert_close(Length::parse("-.5 m").unwrap().si(), -0.5);
    assert_close(Length::parse("+7. m").unwrap().si(), 7.0);
    assert_close(Length::parse("5km").unwrap().si(), 5000.0);
    assert_close(Length::parse("  12 ft  ").unwrap().si(), 3.6576);
    assert!(Length::parse("NaN m").unwrap().is_nan());
    assert_eq!(Length::parse("-inf m").unwrap().si(), f64::NEG_INFINITY);
    assert_eq!(
        Length::parse("Infinity m").unwrap().si(),
        f64::INFINITY
    );
}

#[test]
fn decimal_values() {
    assert_eq!(decimal_value("42 K"), Ok((" K", 42.0)));
    assert_eq!(decimal_value("1e3eV"), Ok(("eV", 1000.0)));
    assert_eq!(decimal_value("5 eV"), Ok((" eV", 5.0)));
    assert!(decimal_value("m").is_err());
}

#[test]
fn parse_exponent_lookalike() {
    let e = Energy::parse("5 eV").unwrap();
    assert_close(e.si() / 1.602176634e-19, 5.0);
}

#[test]
fn parse_localized() {
    assert_close(Duration::parse("2 u").unwrap().si(), 7200.0);
    assert_close(Duration::parse("3 dag").unwrap().si(), 259200.0);
    assert_eq!(
        Duration::parse("2 u").unwrap().unit(),
        DurationUnit::Hour
    );
}

#[test]
fn parse_absolute() {
    let t = AbsoluteTemperature::parse("-4 °C").unwrap();
    assert_close(t.si(), 269.15);
    assert_eq!(t.unit(), AbsoluteTemperatureUnit::Celsius);

    let t = Time::parse("1 day(J2000)").unwrap();
    assert_close(t.si(), quantities::J2000 + 86400.0);
    assert_eq!(t.unit(), TimeUnit::J2000Day);
}

#[test]
fn from_str() {
    let p = Pressure::from_str("5 kPa").unwrap();
    assert_eq!(p.si(), 5000.0);
    let l: Length = "3 ft".parse().unwrap();
    assert_close(l.si(), 0.9144);
}

#[test]
fn of_abbreviation() {
    let l = Length::of(3.0, "km").unwrap();
    assert_eq!(l.si(), 3000.0);
    assert_eq!(l.unit(), LengthUnit::Meter(SiPrefix::Kilo));
    assert!(matches!(
        Length::of(3.0, ""),
        Err(QuantityError::InvalidArgument(_))
    ));
    assert!(matches!(
        Length::of(3.0, "parsecs"),
        Err(QuantityError::Parse {
            reason: ParseFailure::UnknownUnit(_),
            ..
        })
    ));
}

#[test]
fn parse_dynamic() {
    let (value, unit) = parse_scalar_info(Quantity::Speed, "36 km/h").unwrap();
    assert_eq!(value, 36.0);
    assert_eq!(unit.abbreviation(), "km/h");
    assert_eq!(unit.quantity, Quantity::Speed);
    assert_close(unit.to_si(value), 10.0);

    let knot = parse_unit_info(Quantity::Speed, "kt").unwrap();
    assert_eq!(knot.abbreviation(), "kn");
    assert!(parse_unit_info(Quantity::Speed, "m").is_err());
}

#[test]
fn parse_quantity_names() {
    assert_eq!(
        Quantity::from_str("absolute-temperature").unwrap(),
        Quantity::AbsoluteTemperature
    );
    assert_eq!(
        Quantity::from_str("Flow_Volume").unwrap(),
        Quantity::FlowVolume
    );
    assert_eq!(Quantity::from_str("speed").unwrap(), Quantity::Speed);
    assert!(Quantity::from_str("warp factor").is_err());
}
