/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::mem::MaybeUninit;

use super::super::prefix::{FracPrefix, Prefix, SiPrefix};

use super::{
    AbsoluteTemperatureUnit, AccelerationUnit, AmountUnit, AngleUnit,
    AngularVelocityUnit, AreaUnit, ChargeUnit, ConductanceUnit, CurrentUnit,
    DensityUnit, DimensionlessUnit, DirectionUnit, DurationUnit, EnergyUnit,
    FlowVolumeUnit, ForceUnit, FrequencyUnit, LengthUnit, LinearDensityUnit,
    LuminousIntensityUnit, MassUnit, MoneyUnit, PositionUnit, PotentialUnit,
    PowerUnit, PressureUnit, ResistanceUnit, SpeedUnit, TemperatureUnit,
    TimeUnit, TorqueUnit, VolumeUnit,
};

/* Unit lists are built at compile time. A unit with a prefix
 * expands to one entry per prefix in the named list of the prefix
 * type (SCALE if no list is given). */

macro_rules! units_len {
    ($unit:ident) => {
        1
    };
    ($unit:ident ( $prefix:ident ) ) => {
        units_len!($unit ( $prefix SCALE ))
    };
    ($unit:ident ( $prefix:ident $list:ident ) ) => {
        $prefix::$list.len()
    };
    ($unit:ident $(( $prefix:ident $($list:ident)? ))?, $($nextUnit:ident $(( $nextPrefix:ident $($nextList:ident)? ))?),+) => {
        units_len!($unit $( ( $prefix $($list)? ) )?) + units_len!($($nextUnit $(( $nextPrefix $($nextList)? ))?),+)
    };
}

macro_rules! add_units {
    ($r:ident, $i:expr, $ty:ident, $unit:ident) => {{
        $r[$i] = MaybeUninit::new($ty::$unit);
        $i + 1
    }};
    ($r:ident, $i:expr, $ty:ident, $unit:ident ( $prefix:ident )) => {
        add_units!($r, $i, $ty, $unit ( $prefix SCALE ))
    };
    ($r:ident, $i:expr, $ty:ident, $unit:ident ( $prefix:ident $list:ident )) => {{
        let mut i = 0;
        while i < $prefix::$list.len() {
            $r[$i + i] = MaybeUninit::new($ty::$unit($prefix::$list[i]));
            i += 1;
        }
        $i + $prefix::$list.len()
    }};
    ($r:ident, $i:expr, $ty:ident, $unit:ident $(( $prefix:ident $($list:ident)? ))?, $( $nextUnit:ident $(( $nextPrefix:ident $($nextList:ident)? ))? ),+) => {{
        let i = add_units!($r, $i, $ty, $unit $(( $prefix $($list)? ))?);
        add_units!($r, i, $ty, $($nextUnit $(( $nextPrefix $($nextList)? ))?),+)
    }};
}

macro_rules! define_units {
    ($name:ident, $ty:ident, $($unit:ident $(( $prefix:ident $($list:ident)? ))?),+) => {
        pub(crate) static $name: [$ty; units_len!($($unit $(($prefix $($list)?))?),+)] = {
            let mut r = [MaybeUninit::uninit(); units_len!($($unit $(($prefix $($list)?))?),+)];
            let i = add_units!(r, 0, $ty, $($unit $(($prefix $($list)?))?),+);
            assert!(r.len() == i);
            unsafe { std::mem::transmute(r) }
        };
    };
}

define_units!(
    DIMENSIONLESS_UNITS,
    DimensionlessUnit,
    One,
    Percent,
    Permille,
    PartsPerMillion,
    PartsPerBillion
);
define_units!(
    ANGLE_UNITS,
    AngleUnit,
    Radian,
    Milliradian,
    Degree,
    ArcMinute,
    ArcSecond,
    Gradian,
    Revolution
);
define_units!(
    DIRECTION_UNITS,
    DirectionUnit,
    EastRadian,
    EastDegree,
    NorthRadian,
    NorthDegree
);
define_units!(
    LENGTH_UNITS,
    LengthUnit,
    Meter(SiPrefix),
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
    AstronomicalUnit,
    LightYear,
    Parsec
);
define_units!(
    POSITION_UNITS,
    PositionUnit,
    Meter(SiPrefix),
    Inch,
    Foot,
    Yard,
    Mile,
    NauticalMile,
    AstronomicalUnit,
    LightYear,
    Parsec
);
define_units!(
    MASS_UNITS,
    MassUnit,
    Gram(SiPrefix),
    Tonne,
    Pound,
    Ounce,
    Dalton
);
define_units!(
    DURATION_UNITS,
    DurationUnit,
    Second(FracPrefix),
    Minute,
    Hour,
    Day,
    Week
);
define_units!(
    TIME_UNITS,
    TimeUnit,
    Second(FracPrefix),
    Minute,
    Hour,
    Day,
    Week,
    J2000Second,
    J2000Day
);
define_units!(CURRENT_UNITS, CurrentUnit, Ampere(SiPrefix));
define_units!(
    TEMPERATURE_UNITS,
    TemperatureUnit,
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine
);
define_units!(
    ABSOLUTE_TEMPERATURE_UNITS,
    AbsoluteTemperatureUnit,
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine
);
define_units!(AMOUNT_UNITS, AmountUnit, Mole(SiPrefix));
define_units!(
    LUMINOUS_INTENSITY_UNITS,
    LuminousIntensityUnit,
    Candela(SiPrefix)
);
define_units!(MONEY_UNITS, MoneyUnit, Euro, Cent);
define_units!(
    LINEAR_DENSITY_UNITS,
    LinearDensityUnit,
    PerMeter(SiPrefix METRIC),
    PerInch,
    PerFoot
);
define_units!(
    AREA_UNITS,
    AreaUnit,
    SquareMeter(SiPrefix METRIC),
    Are,
    Hectare,
    Acre,
    SquareFoot,
    SquareMile
);
define_units!(
    VOLUME_UNITS,
    VolumeUnit,
    CubicMeter(SiPrefix METRIC),
    Liter(SiPrefix LITER),
    Gallon,
    CubicFoot,
    CubicInch
);
define_units!(
    SPEED_UNITS,
    SpeedUnit,
    MeterPerSecond,
    KilometerPerHour,
    MilePerHour,
    Knot,
    FootPerSecond
);
define_units!(
    ACCELERATION_UNITS,
    AccelerationUnit,
    MeterPerSecondSquared,
    KilometerPerHourPerSecond,
    FootPerSecondSquared,
    StandardGravity,
    Gal
);
define_units!(
    FREQUENCY_UNITS,
    FrequencyUnit,
    Hertz(SiPrefix),
    PerMinute,
    PerHour,
    PerDay
);
define_units!(
    ANGULAR_VELOCITY_UNITS,
    AngularVelocityUnit,
    RadianPerSecond,
    DegreePerSecond,
    RevolutionPerSecond,
    RevolutionPerMinute
);
define_units!(
    FORCE_UNITS,
    ForceUnit,
    Newton(SiPrefix),
    Dyne,
    KilogramForce,
    PoundForce
);
define_units!(
    ENERGY_UNITS,
    EnergyUnit,
    Joule(SiPrefix),
    WattHour(SiPrefix ENGINEERING),
    Calorie,
    Kilocalorie,
    ElectronVolt,
    BritishThermalUnit
);
define_units!(
    TORQUE_UNITS,
    TorqueUnit,
    NewtonMeter,
    KilogramForceMeter,
    PoundForceFoot
);
define_units!(
    POWER_UNITS,
    PowerUnit,
    Watt(SiPrefix),
    Horsepower,
    ErgPerSecond
);
define_units!(
    PRESSURE_UNITS,
    PressureUnit,
    Pascal(SiPrefix),
    Bar,
    Millibar,
    Atmosphere,
    Psi,
    MillimeterOfMercury,
    Torr
);
define_units!(
    DENSITY_UNITS,
    DensityUnit,
    KilogramPerCubicMeter,
    GramPerCubicCentimeter,
    GramPerLiter,
    KilogramPerLiter
);
define_units!(
    FLOW_VOLUME_UNITS,
    FlowVolumeUnit,
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    LiterPerMinute,
    LiterPerHour,
    GallonPerMinute
);
define_units!(
    CHARGE_UNITS,
    ChargeUnit,
    Coulomb(SiPrefix),
    AmpereHour(SiPrefix ENGINEERING),
    ElementaryCharge
);
define_units!(POTENTIAL_UNITS, PotentialUnit, Volt(SiPrefix));
define_units!(RESISTANCE_UNITS, ResistanceUnit, Ohm(SiPrefix));
define_units!(CONDUCTANCE_UNITS, ConductanceUnit, Siemens(SiPrefix));
