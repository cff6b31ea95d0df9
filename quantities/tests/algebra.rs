/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;

use quantities::{
    Area, AreaUnit, BaseDimension, Closure, Dimension, Dimensionless,
    DimensionlessUnit, Duration, DurationUnit, ElectricalCurrent,
    ElectricalPotential, ElectricalResistance, Energy, Force, ForceUnit,
    Frequency, FrequencyUnit, Length, LengthUnit, Mass, MassUnit, Operator,
    Power, PowerUnit, Pressure, PressureUnit, Quantity, QuantityError,
    Reciprocal, SIScalar, Scalar, SiPrefix, Speed, SpeedUnit, CLOSURES,
};
use quantities::{
    ConductanceUnit, CurrentUnit, LinearDensity, PotentialUnit,
    ResistanceUnit, Temperature,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "{} != {}",
        actual,
        expected
    );
}

fn km() -> LengthUnit {
    LengthUnit::Meter(SiPrefix::Kilo)
}

#[test]
fn closures_are_consistent() {
    for closure in CLOSURES {
        assert!(closure.is_consistent(), "{}", closure);
    }
}

#[test]
fn closures_are_unique() {
    for (i, a) in CLOSURES.iter().enumerate() {
        for b in &CLOSURES[i + 1..] {
            assert!(
                (a.lhs, a.operator, a.rhs) != (b.lhs, b.operator, b.rhs),
                "{} and {}",
                a,
                b
            );
        }
    }
}

#[test]
fn products_commute() {
    for closure in CLOSURES.iter().filter(|c| c.operator == Operator::Times) {
        let swapped = Closure::find(closure.rhs, Operator::Times, closure.lhs)
            .expect("missing commuted product");
        assert_eq!(swapped.result, closure.result);
    }
}

#[test]
fn find_closure() {
    let c =
        Closure::find(Quantity::Pressure, Operator::Times, Quantity::Area)
            .unwrap();
    assert_eq!(c.result, Quantity::Force);
    assert_eq!(c.to_string(), "pressure × area = force");
    assert!(
        Closure::find(Quantity::Mass, Operator::Times, Quantity::Speed)
            .is_none()
    );
}

#[test]
fn typed_products() {
    let p = Pressure::new(2.0, PressureUnit::Bar);
    let a = Area::new(1.0, AreaUnit::SquareMeter(SiPrefix::Centi));
    let f: Force = p * a;
    assert_close(f.si(), 20.0);
    assert_eq!(f.unit(), ForceUnit::Newton(SiPrefix::Unit));
    let g: Force = a * p;
    assert_close(g.si(), f.si());

    let side = Length::new(3.0, LengthUnit::Meter(SiPrefix::Unit));
    let square: Area = side * side;
    assert_close(square.si(), 9.0);

    let e: Energy = Power::new(2.0, PowerUnit::Watt(SiPrefix::Kilo))
        * Duration::new(1.0, DurationUnit::Hour);
    assert_close(e.si(), 7.2e6);

    let u: ElectricalPotential = ElectricalResistance::new(
        10.0,
        ResistanceUnit::Ohm(SiPrefix::Unit),
    ) * ElectricalCurrent::new(
        200.0,
        CurrentUnit::Ampere(SiPrefix::Milli),
    );
    assert_close(u.in_unit(PotentialUnit::Volt(SiPrefix::Unit)), 2.0);
}

#[test]
fn typed_quotients() {
    let v: Speed =
        Length::new(100.0, km()) / Duration::new(1.0, DurationUnit::Hour);
    assert_close(v.in_unit(SpeedUnit::KilometerPerHour), 100.0);

    let f: Frequency = Dimensionless::new(1.0, DimensionlessUnit::One)
        / Duration::new(1.0, DurationUnit::Minute);
    assert_close(f.in_unit(FrequencyUnit::PerMinute), 1.0);

    let ratio: Dimensionless =
        Length::new(1.0, km()) / Length::new(250.0, LengthUnit::Meter(SiPrefix::Unit));
    assert_close(ratio.si(), 4.0);
}

#[test]
fn reciprocal() {
    let x = Duration::new(2.0, DurationUnit::Minute);
    let r = x.reciprocal();
    assert_close(r.si(), 1.0 / 120.0);
    assert_eq!(r.dimension(), Dimension::TIME.inverse());
    assert_eq!(r.quantity(), Some(Quantity::Frequency));
    assert_close(x.si() * r.si(), 1.0);
    assert_close(r.reciprocal().si(), 120.0);
    assert_eq!(r.reciprocal().quantity(), Some(Quantity::Duration));

    let f = r.as_quantity::<FrequencyUnit>().unwrap();
    assert_close(f.in_unit(FrequencyUnit::PerMinute), 0.5);
}

#[test]
fn typed_reciprocal() {
    let f: Frequency = Duration::new(2.0, DurationUnit::Minute).recip();
    assert_close(f.si(), 1.0 / 120.0);
    assert_close(f.in_unit(FrequencyUnit::PerMinute), 0.5);
    let d: Duration = f.recip();
    assert_close(d.in_unit(DurationUnit::Minute), 2.0);

    let per_km: LinearDensity = Length::new(1.0, km()).recip();
    assert_close(per_km.si(), 1e-3);
    assert_eq!(per_km.dimension(), Dimension::LENGTH.inverse());

    let g = ElectricalResistance::new(4.0, ResistanceUnit::Ohm(SiPrefix::Unit))
        .recip();
    assert_close(g.in_unit(ConductanceUnit::Siemens(SiPrefix::Milli)), 250.0);
    assert_close(g.recip().si(), 4.0);

    let half = Dimensionless::new(200.0, DimensionlessUnit::Percent).recip();
    assert_close(half.si(), 0.5);
}

#[test]
fn typed_reciprocal_matches_dimension() {
    fn check<Q: Scalar + Reciprocal + Copy>(q: Q)
    where
        Q::Output: Scalar,
    {
        let r = q.recip().to_si_scalar();
        assert_eq!(r.dimension(), q.to_si_scalar().reciprocal().dimension());
        assert_close(r.si(), q.reciprocal().si());
    }
    check(Duration::ONE);
    check(Frequency::ONE);
    check(Length::ONE);
    check(LinearDensity::ONE);
    check(ElectricalResistance::ONE);
    check(quantities::ElectricalConductance::ONE);
    check(Dimensionless::ONE);
}

#[test]
fn unnamed_results() {
    let m = Mass::new(2.0, MassUnit::Gram(SiPrefix::Kilo));
    let r = m.reciprocal();
    assert_eq!(r.quantity(), None);
    assert_eq!(r.to_string(), "0.5 1/kg");

    let momentum = m.times(&Speed::new(3.0, SpeedUnit::MeterPerSecond));
    assert_eq!(momentum.si(), 6.0);
    assert_eq!(
        momentum.dimension(),
        Dimension::new([1, 1, -1, 0, 0, 0, 0, 0])
    );
    assert_eq!(momentum.quantity(), None);
    assert_eq!(momentum.to_string(), "6 kg⋅m/s");

    let energy = Force::new(2.0, ForceUnit::Newton(SiPrefix::Unit))
        .times(&Length::new(3.0, LengthUnit::Meter(SiPrefix::Unit)));
    assert_eq!(energy.quantity(), Some(Quantity::Energy));
    assert_close(energy.as_quantity::<quantities::EnergyUnit>().unwrap().si(), 6.0);
}

#[test]
fn si_scalar_arithmetic() {
    let a = SIScalar::new(2.0, Dimension::LENGTH);
    let b = SIScalar::new(3.0, Dimension::LENGTH);
    let t = SIScalar::new(1.0, Dimension::TIME);

    assert_eq!((a + b).unwrap(), SIScalar::new(5.0, Dimension::LENGTH));
    assert_eq!((a - b).unwrap(), SIScalar::new(-1.0, Dimension::LENGTH));
    assert_eq!(
        a + t,
        Err(QuantityError::Incompatible(Dimension::LENGTH, Dimension::TIME))
    );
    assert_eq!(a.partial_cmp(&b).unwrap(), Some(Ordering::Less));
    assert!(a.partial_cmp(&t).is_err());

    assert_eq!((a * b).dimension(), Dimension::LENGTH.powi(2));
    assert_eq!((a / t).quantity(), Some(Quantity::Speed));
    assert_eq!((a * 2.0).si(), 4.0);
    assert_eq!((-a).si(), -2.0);
    assert!(a.as_quantity::<SpeedUnit>().is_err());
    assert!(a.as_absolute::<quantities::PositionUnit>().is_ok());
}

#[test]
fn typed_to_si_scalar() {
    let s: SIScalar = Temperature::new(5.0, quantities::TemperatureUnit::Kelvin).into();
    assert_eq!(s.dimension(), Dimension::TEMPERATURE);
    assert_eq!(s.quantity(), Some(Quantity::Temperature));
    assert_eq!(SIScalar::new(0.25, Dimension::DIMENSIONLESS).to_string(), "0.25");

    let t = quantities::AbsoluteTemperature::new(
        20.0,
        quantities::AbsoluteTemperatureUnit::Celsius,
    );
    let s = SIScalar::from(t);
    assert_close(s.si(), 293.15);
    assert_eq!(s.dimension(), Dimension::TEMPERATURE);
    let time = SIScalar::from(quantities::Time::ZERO);
    assert_eq!(time.dimension(), Dimension::TIME);
}

#[test]
fn dimensions() {
    assert_eq!(Quantity::Power.dimension().to_string(), "kg⋅m²/s³");
    assert_eq!(Quantity::Frequency.dimension().to_string(), "1/s");
    assert_eq!(Dimension::DIMENSIONLESS.to_string(), "1");
    assert_eq!(Quantity::Money.dimension().exponent(BaseDimension::Money), 1);
    assert_eq!(
        Dimension::LENGTH * Dimension::LENGTH / Dimension::TIME,
        Quantity::Area.dimension() / Quantity::Duration.dimension()
    );

    assert_eq!(
        Quantity::from_dimension(Dimension::DIMENSIONLESS),
        Some(Quantity::Dimensionless)
    );
    assert_eq!(
        Quantity::from_dimension(Dimension::LENGTH),
        Some(Quantity::Length)
    );
    assert_eq!(
        Quantity::from_dimension(Quantity::Torque.dimension()),
        Some(Quantity::Energy)
    );
    assert_eq!(
        Quantity::from_dimension(Dimension::TIME.inverse()),
        Some(Quantity::Frequency)
    );
}

#[test]
fn dimension_exponents_saturate() {
    let meter = Length::ONE.to_si_scalar();
    let mut s = meter;
    for _ in 0..200 {
        s = s * meter;
    }
    assert_eq!(s.si(), 1.0);
    assert_eq!(s.dimension().exponent(BaseDimension::Length), i8::MAX);
    assert_eq!(
        s.reciprocal().dimension().exponent(BaseDimension::Length),
        -i8::MAX
    );

    let low = Dimension::new([i8::MIN, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(low.to_string(), "1/m¹²⁸");
    assert_eq!(low.inverse().exponent(BaseDimension::Length), i8::MAX);
    assert_eq!(
        (low / Dimension::LENGTH).exponent(BaseDimension::Length),
        i8::MIN
    );
}
