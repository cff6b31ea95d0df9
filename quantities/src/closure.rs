/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Named results of products and quotients.
//!
//! Every entry generates a `Mul` or `Div` impl between the typed
//! scalars and a row in `CLOSURES`. Products are commutative: they
//! are declared once and implemented for both operand orders.
//! Pairs that are not listed can still be combined through
//! `Scalar::times` and `Scalar::divide`, which yield an `SIScalar`.
//! In the same way, `Reciprocal` gives a typed inverse where one is
//! named, next to the untyped `Scalar::reciprocal`.

use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

use super::quantity::Quantity;
use super::scalar::{
    Acceleration, Angle, AngularVelocity, Area, Density, Dimensionless,
    Duration, ElectricalCharge, ElectricalConductance, ElectricalCurrent,
    ElectricalPotential, ElectricalResistance, Energy, FlowVolume, Force,
    Frequency, Length, LinearDensity, Mass, Power, Pressure, Speed, Torque,
    Volume,
};

#[derive(
    Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum Operator {
    Times,
    Divide,
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Operator::Times => write!(f, "×"),
            Operator::Divide => write!(f, "÷"),
        }
    }
}

/// lhs (operator) rhs = result
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug)]
pub struct Closure {
    pub lhs: Quantity,
    pub operator: Operator,
    pub rhs: Quantity,
    pub result: Quantity,
}

impl Closure {
    pub fn find(
        lhs: Quantity,
        operator: Operator,
        rhs: Quantity,
    ) -> Option<&'static Closure> {
        CLOSURES
            .iter()
            .find(|c| c.lhs == lhs && c.operator == operator && c.rhs == rhs)
    }

    /// Whether the result's dimension follows from the operands'.
    pub fn is_consistent(&self) -> bool {
        let (lhs, rhs) = (self.lhs.dimension(), self.rhs.dimension());
        self.result.dimension()
            == match self.operator {
                Operator::Times => lhs * rhs,
                Operator::Divide => lhs / rhs,
            }
    }
}

impl Display for Closure {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs, self.operator, self.rhs, self.result
        )
    }
}

/// Inverse of a quantity whose inverse has a name, eg. duration and
/// frequency.
pub trait Reciprocal {
    type Output;
    fn recip(self) -> Self::Output;
}

macro_rules! impl_recip {
    ($q:ident, $out:ident) => {
        impl Reciprocal for $q {
            type Output = $out;
            fn recip(self) -> $out {
                $out::from_si(1.0 / self.si())
            }
        }
    };
}

macro_rules! closure_row {
    ($lhs:ident, $op:ident, $rhs:ident, $out:ident) => {
        Closure {
            lhs: $lhs::QUANTITY,
            operator: Operator::$op,
            rhs: $rhs::QUANTITY,
            result: $out::QUANTITY,
        }
    };
}

macro_rules! impl_mul {
    ($lhs:ident, $rhs:ident, $out:ident) => {
        impl Mul<$rhs> for $lhs {
            type Output = $out;
            fn mul(self, rhs: $rhs) -> $out {
                $out::from_si(self.si() * rhs.si())
            }
        }
    };
}

macro_rules! impl_div {
    ($lhs:ident, $rhs:ident, $out:ident) => {
        impl Div<$rhs> for $lhs {
            type Output = $out;
            fn div(self, rhs: $rhs) -> $out {
                $out::from_si(self.si() / rhs.si())
            }
        }
    };
}

macro_rules! closures {
    (
        squares { $( $sq:ident => $sqout:ident ),* $(,)? }
        products { $( $a:ident * $b:ident => $pout:ident ),* $(,)? }
        quotients { $( $n:ident / $d:ident => $qout:ident ),* $(,)? }
        inverses { $( $inv:ident <=> $invout:ident ),* $(,)? }
    ) => {
        $( impl_recip!($inv, $invout); impl_recip!($invout, $inv); )*
        $( impl_mul!($sq, $sq, $sqout); )*
        $( impl_mul!($a, $b, $pout); impl_mul!($b, $a, $pout); )*
        $( impl_div!($n, $d, $qout); )*

        /// All declared closures, in declaration order.
        pub static CLOSURES: &[Closure] = &[
            $( closure_row!($sq, Times, $sq, $sqout), )*
            $(
                closure_row!($a, Times, $b, $pout),
                closure_row!($b, Times, $a, $pout),
            )*
            $( closure_row!($n, Divide, $d, $qout), )*
        ];
    };
}

closures! {
    squares {
        Length => Area,
    }
    products {
        Length * Area => Volume,
        Length * Frequency => Speed,
        Speed * Duration => Length,
        Speed * Frequency => Acceleration,
        Acceleration * Duration => Speed,
        Mass * Acceleration => Force,
        Force * Length => Energy,
        Force * Speed => Power,
        Pressure * Area => Force,
        Power * Duration => Energy,
        Torque * AngularVelocity => Power,
        Density * Volume => Mass,
        FlowVolume * Duration => Volume,
        Frequency * Duration => Dimensionless,
        AngularVelocity * Duration => Angle,
        LinearDensity * Length => Dimensionless,
        LinearDensity * Area => Length,
        ElectricalCurrent * Duration => ElectricalCharge,
        ElectricalPotential * ElectricalCurrent => Power,
        ElectricalResistance * ElectricalCurrent => ElectricalPotential,
        ElectricalPotential * ElectricalConductance => ElectricalCurrent,
        ElectricalCharge * ElectricalPotential => Energy,
    }
    quotients {
        Area / Length => Length,
        Volume / Length => Area,
        Volume / Area => Length,
        Length / Duration => Speed,
        Length / Speed => Duration,
        Speed / Length => Frequency,
        Speed / Duration => Acceleration,
        Speed / Acceleration => Duration,
        Acceleration / Speed => Frequency,
        Force / Mass => Acceleration,
        Force / Acceleration => Mass,
        Force / Area => Pressure,
        Force / Pressure => Area,
        Energy / Length => Force,
        Energy / Force => Length,
        Energy / Duration => Power,
        Energy / Power => Duration,
        Power / Speed => Force,
        Power / Force => Speed,
        Torque / Force => Length,
        Torque / Length => Force,
        Mass / Volume => Density,
        Mass / Density => Volume,
        Volume / Duration => FlowVolume,
        Volume / FlowVolume => Duration,
        Dimensionless / Duration => Frequency,
        Dimensionless / Frequency => Duration,
        Dimensionless / Length => LinearDensity,
        Dimensionless / LinearDensity => Length,
        Angle / Duration => AngularVelocity,
        Angle / AngularVelocity => Duration,
        ElectricalCharge / Duration => ElectricalCurrent,
        ElectricalCharge / ElectricalCurrent => Duration,
        Energy / ElectricalCharge => ElectricalPotential,
        Power / ElectricalCurrent => ElectricalPotential,
        Power / ElectricalPotential => ElectricalCurrent,
        ElectricalPotential / ElectricalCurrent => ElectricalResistance,
        ElectricalPotential / ElectricalResistance => ElectricalCurrent,
        ElectricalCurrent / ElectricalPotential => ElectricalConductance,
    }
    inverses {
        Duration <=> Frequency,
        Length <=> LinearDensity,
        ElectricalResistance <=> ElectricalConductance,
    }
}

impl_recip!(Dimensionless, Dimensionless);
