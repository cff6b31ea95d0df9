/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use quantities::{
    AbsoluteTemperature, AbsoluteTemperatureUnit, Angle, AngleUnit, Dimensionless,
    DimensionlessUnit, Direction, DirectionUnit, Duration, DurationUnit,
    Length, LengthUnit, Mass, MassUnit, Position, PositionUnit, Quantity,
    QuantityError, SiPrefix, Speed, SpeedUnit, Temperature, TemperatureUnit,
    Time, TimeUnit,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "{} != {}",
        actual,
        expected
    );
}

fn m(value: f64) -> Length {
    Length::new(value, LengthUnit::Meter(SiPrefix::Unit))
}

fn km(value: f64) -> Length {
    Length::new(value, LengthUnit::Meter(SiPrefix::Kilo))
}

#[test]
fn constants() {
    assert_eq!(Length::ZERO.si(), 0.0);
    assert_eq!(Length::ONE.si(), 1.0);
    assert_eq!(Mass::ONE.unit(), MassUnit::Gram(SiPrefix::Kilo));
    assert!(Length::NAN.is_nan());
    assert!(!Length::POSITIVE_INFINITY.is_finite());
    assert_eq!(Length::NEGATIVE_INFINITY.si(), f64::NEG_INFINITY);
    assert_eq!(Length::MAX.si(), f64::MAX);
    assert_eq!(Length::MIN.si(), f64::MIN);
    assert_eq!(Length::QUANTITY, Quantity::Length);
    assert_eq!(Time::QUANTITY, Quantity::Time);
    assert_eq!(Length::default(), Length::ZERO);
    assert_eq!(Time::ZERO.unit(), TimeUnit::Second(quantities::FracPrefix::Unit));
}

#[test]
fn conversion() {
    let l = km(1.5);
    assert_eq!(l.si(), 1500.0);
    assert_eq!(l.value(), 1.5);
    assert_close(l.in_unit(LengthUnit::Foot), 4921.259842519685);
    let l = l.with_unit(LengthUnit::Meter(SiPrefix::Unit));
    assert_eq!(l.si(), 1500.0);
    assert_eq!(l.to_string(), "1500 m");
    assert_eq!(l.quantity(), Quantity::Length);
    assert_eq!(l.dimension(), Quantity::Length.dimension());
}

#[test]
fn arithmetic() {
    let sum = km(1.0) + m(500.0);
    assert_eq!(sum.si(), 1500.0);
    assert_eq!(sum.unit(), LengthUnit::Meter(SiPrefix::Kilo));
    assert_eq!((m(500.0) - km(1.0)).si(), -500.0);
    assert_eq!((-km(1.0)).si(), -1000.0);
    assert_eq!((km(1.0) * 3.0).si(), 3000.0);
    assert_eq!((3.0 * km(1.0)).unit(), LengthUnit::Meter(SiPrefix::Kilo));
    assert_eq!((km(3.0) / 2.0).si(), 1500.0);
    assert_eq!(m(-2.0).abs(), m(2.0));

    let total: Length = vec![m(1.0), km(1.0), m(-1.0)].into_iter().sum();
    assert_eq!(total.si(), 1000.0);
    let lengths = [m(2.0), m(3.0)];
    assert_eq!(lengths.iter().sum::<Length>().si(), 5.0);
}

#[test]
fn comparison() {
    assert_eq!(km(1.0), m(1000.0));
    assert!(km(1.0) > m(999.0));
    assert!(Length::NAN != Length::NAN);
    assert!(Length::NAN.partial_cmp(&m(1.0)).is_none());
}

#[test]
fn max_min() {
    let a = m(1.0);
    let b = m(2.0);
    let c = m(3.0);
    assert_eq!(Length::max(a, b), b);
    assert_eq!(Length::min(a, b), a);
    assert_eq!(Length::max_of(b, a, &[c]), c);
    assert_eq!(Length::min_of(c, b, &[a]), a);

    let tie = a.with_unit(LengthUnit::Meter(SiPrefix::Kilo));
    assert_eq!(Length::max(a, tie).unit(), a.unit());
    assert_eq!(Length::max(tie, a).unit(), tie.unit());
    assert_eq!(Length::min(tie, a).unit(), tie.unit());
    assert_eq!(Length::max_of(a, tie, &[tie]).unit(), a.unit());
    assert_eq!(Length::min_of(tie, a, &[a]).unit(), tie.unit());

    let t0 = Time::new(0.0, TimeUnit::J2000Second);
    let t1 = Time::new(1.0, TimeUnit::J2000Day);
    assert_eq!(Time::max(t0, t1), t1);
    assert_eq!(Time::min_of(t1, t1, &[t0]), t0);
}

#[test]
fn interpolate_relative() {
    let zero = m(0.0);
    let one = km(1.0);
    let half = Length::interpolate(zero, one, 0.5);
    assert_close(half.si(), 500.0);
    assert_eq!(half.unit(), zero.unit());
    assert_eq!(Length::interpolate(zero, one, 0.0), zero);
    assert_eq!(Length::interpolate(zero, one, 1.0), one);
    assert_close(Length::interpolate(zero, one, 1.5).si(), 1500.0);
    assert_close(Length::interpolate(zero, one, -0.5).si(), -500.0);
}

#[test]
fn interpolate_absolute() {
    let zero = AbsoluteTemperature::new(0.0, AbsoluteTemperatureUnit::Celsius);
    let one = AbsoluteTemperature::new(100.0, AbsoluteTemperatureUnit::Celsius);
    let t = AbsoluteTemperature::interpolate(zero, one, 0.25).unwrap();
    assert_close(t.value(), 25.0);
    assert_eq!(t.unit(), AbsoluteTemperatureUnit::Celsius);
    assert_close(
        AbsoluteTemperature::interpolate(zero, one, 0.0).unwrap().si(),
        zero.si(),
    );
    assert_close(
        AbsoluteTemperature::interpolate(zero, one, 1.0).unwrap().si(),
        one.si(),
    );
    assert_eq!(
        AbsoluteTemperature::interpolate(zero, one, 1.5),
        Err(QuantityError::OutOfRange {
            quantity: Quantity::AbsoluteTemperature,
            ratio: 1.5
        })
    );
    assert!(AbsoluteTemperature::interpolate(zero, one, -0.1).is_err());
}

#[test]
fn temperature_difference() {
    let a = AbsoluteTemperature::new(20.0, AbsoluteTemperatureUnit::Celsius);
    let b = AbsoluteTemperature::new(25.0, AbsoluteTemperatureUnit::Celsius);
    let d: Temperature = b - a;
    assert_close(d.si(), 5.0);
    assert_close(d.value(), 5.0);
    assert_eq!(d.unit(), TemperatureUnit::Celsius);

    let c = a + Temperature::new(9.0, TemperatureUnit::Fahrenheit);
    assert_close(c.value(), 25.0);
    assert_eq!(c.unit(), AbsoluteTemperatureUnit::Celsius);
    let c = Temperature::new(5.0, TemperatureUnit::Kelvin) + a;
    assert_close(c.in_unit(AbsoluteTemperatureUnit::Celsius), 25.0);
    assert_close((b - d).value(), 20.0);

    let freezing =
        AbsoluteTemperature::new(32.0, AbsoluteTemperatureUnit::Fahrenheit);
    assert_close(freezing.in_unit(AbsoluteTemperatureUnit::Celsius), 0.0);
    assert_close(freezing.si(), 273.15);
}

#[test]
fn absolute_points() {
    let d = Position::new(10.0, PositionUnit::Meter(SiPrefix::Unit))
        - Position::new(4.0, PositionUnit::Meter(SiPrefix::Unit));
    assert_eq!(d, m(6.0));

    let epoch = Time::new(0.0, TimeUnit::J2000Second);
    assert_eq!(epoch.si(), quantities::J2000);
    let later = Time::new(1.0, TimeUnit::J2000Day);
    let elapsed: Duration = later - epoch;
    assert_close(elapsed.si(), 86400.0);
    assert_eq!(elapsed.unit(), DurationUnit::Day);
    assert_close(
        (epoch + Duration::new(2.0, DurationUnit::Day))
            .in_unit(TimeUnit::J2000Day),
        2.0,
    );

    let west = Direction::new(90.0, DirectionUnit::NorthDegree);
    assert_close(west.in_unit(DirectionUnit::EastDegree), 180.0);
    let north = Direction::new(0.0, DirectionUnit::NorthDegree);
    assert_close(north.in_unit(DirectionUnit::EastDegree), 90.0);
    let turn = west - north;
    assert_eq!(turn.unit(), AngleUnit::Degree);
    assert_close(turn.value(), 90.0);
}

#[test]
fn direction_turns_with_angle() {
    for unit in [DirectionUnit::NorthDegree, DirectionUnit::EastDegree] {
        let d = Direction::new(10.0, unit) + Angle::new(5.0, AngleUnit::Degree);
        assert_eq!(d.unit(), unit);
        assert_close(d.value(), 15.0);

        let d = Direction::new(10.0, unit) - Angle::new(5.0, AngleUnit::Degree);
        assert_close(d.value(), 5.0);

        let turn = Direction::new(20.0, unit) - Direction::new(10.0, unit);
        assert_eq!(turn.unit(), AngleUnit::Degree);
        assert_close(turn.value(), 10.0);
    }

    let d = Direction::new(1.0, DirectionUnit::NorthRadian)
        + Angle::new(0.5, AngleUnit::Radian);
    assert_close(d.value(), 1.5);
}

#[test]
fn display() {
    assert_eq!(
        Speed::new(12.3, SpeedUnit::MeterPerSecond).to_string(),
        "12.3 m/s"
    );
    assert_eq!(km(2.0).to_string(), "2 km");
    assert_eq!(
        format!("{:.1}", Temperature::new(5.0, TemperatureUnit::Celsius)),
        "5.0 °C"
    );
    assert_eq!(
        format!(
            "{:.2}",
            AbsoluteTemperature::new(0.0, AbsoluteTemperatureUnit::Kelvin)
        ),
        "0.00 K"
    );
    assert_eq!(
        Dimensionless::new(5.0, DimensionlessUnit::One).to_string(),
        "5"
    );
    assert_eq!(
        format!(
            "{:.0}",
            Dimensionless::new(5.0, DimensionlessUnit::Percent)
        ),
        "5 %"
    );
}

#[test]
fn display_parse_round_trip() {
    for l in [m(1.0), km(2.5), m(-0.25)] {
        assert_eq!(Length::parse(&l.to_string()).unwrap(), l);
        assert_eq!(Length::parse(&l.to_string()).unwrap().unit(), l.unit());
    }
}

#[cfg(not(feature = "serialize_as_string"))]
#[test]
fn serialize() {
    let l = km(2.0);
    let json = serde_json::to_value(l).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"si": 2000.0, "unit": {"Meter": "Kilo"}})
    );
    let back: Length = serde_json::from_value(json).unwrap();
    assert_eq!(back, l);
    assert_eq!(back.unit(), l.unit());
}

#[cfg(feature = "serialize_as_string")]
#[test]
fn serialize() {
    let l = km(2.0);
    let json = serde_json::to_value(l).unwrap();
    assert_eq!(json, serde_json::json!("2 km"));
    let back: Length = serde_json::from_value(json).unwrap();
    assert_eq!(back, l);
    assert_eq!(back.unit(), l.unit());
}

#[cfg(feature = "serialize_as_string")]
#[test]
fn serialize_dimensionless() {
    let x = Dimensionless::from_si(5.0);
    let json = serde_json::to_value(x).unwrap();
    assert_eq!(json, serde_json::json!("5"));
    let back: Dimensionless = serde_json::from_value(json).unwrap();
    assert_eq!(back, x);
    assert_eq!(back.unit(), DimensionlessUnit::One);

    let ratio: Dimensionless = km(1.0) / m(250.0);
    let json = serde_json::to_string(&ratio).unwrap();
    let back: Dimensionless = serde_json::from_str(&json).unwrap();
    assert_eq!(back.si(), 4.0);

    let zero: Dimensionless =
        serde_json::from_value(serde_json::json!("0")).unwrap();
    assert_eq!(zero, Dimensionless::ZERO);
    assert!(serde_json::from_value::<Length>(serde_json::json!("5")).is_err());
}
