/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};

/// Base quantities. Every dimension is a product of integer
/// powers of these.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum BaseDimension {
    /* SI base dimensions. */
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    Amount,
    LuminousIntensity,

    /* Extension slot. */
    Money,
}

pub(crate) static BASE_DIMENSIONS: [BaseDimension; BaseDimension::COUNT] = [
    BaseDimension::Length,
    BaseDimension::Mass,
    BaseDimension::Time,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::Amount,
    BaseDimension::LuminousIntensity,
    BaseDimension::Money,
];

/* SI notation lists mass first. */
static DISPLAY_ORDER: [BaseDimension; BaseDimension::COUNT] = [
    BaseDimension::Mass,
    BaseDimension::Length,
    BaseDimension::Time,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::Amount,
    BaseDimension::LuminousIntensity,
    BaseDimension::Money,
];

impl BaseDimension {
    pub const COUNT: usize = 8;
    pub const LIST: &'static [Self] = &BASE_DIMENSIONS;

    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Symbol of the SI unit for this base dimension.
    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Amount => "mol",
            BaseDimension::LuminousIntensity => "cd",
            BaseDimension::Money => "¤",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Amount => "amount of substance",
            BaseDimension::LuminousIntensity => "luminous intensity",
            BaseDimension::Money => "money",
        }
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

/// Dimension vector: the exponent of every base dimension, in
/// `BaseDimension` order. Two quantities can be converted into
/// each other, added or compared only if their dimensions are
/// equal. Multiplying quantities adds their dimensions.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
    Default,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct Dimension([i8; BaseDimension::COUNT]);

impl Dimension {
    pub const DIMENSIONLESS: Self = Self([0; BaseDimension::COUNT]);
    pub const LENGTH: Self = Self::base(BaseDimension::Length);
    pub const MASS: Self = Self::base(BaseDimension::Mass);
    pub const TIME: Self = Self::base(BaseDimension::Time);
    pub const CURRENT: Self = Self::base(BaseDimension::Current);
    pub const TEMPERATURE: Self = Self::base(BaseDimension::Temperature);
    pub const AMOUNT: Self = Self::base(BaseDimension::Amount);
    pub const LUMINOUS_INTENSITY: Self =
        Self::base(BaseDimension::LuminousIntensity);
    pub const MONEY: Self = Self::base(BaseDimension::Money);

    pub const fn new(exponents: [i8; BaseDimension::COUNT]) -> Self {
        Self(exponents)
    }

    pub const fn base(base: BaseDimension) -> Self {
        let mut exponents = [0; BaseDimension::COUNT];
        exponents[base.index()] = 1;
        Self(exponents)
    }

    pub const fn exponents(&self) -> [i8; BaseDimension::COUNT] {
        self.0
    }

    pub const fn exponent(&self, base: BaseDimension) -> i8 {
        self.0[base.index()]
    }

    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < BaseDimension::COUNT {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Dimension of the product of two quantities. Exponents
    /// saturate at the bounds of `i8`.
    pub const fn product(self, rhs: Self) -> Self {
        let mut r = self.0;
        let mut i = 0;
        while i < BaseDimension::COUNT {
            r[i] = r[i].saturating_add(rhs.0[i]);
            i += 1;
        }
        Self(r)
    }

    /// Dimension of the quotient of two quantities.
    pub const fn quotient(self, rhs: Self) -> Self {
        self.product(rhs.inverse())
    }

    pub const fn powi(self, n: i8) -> Self {
        let mut r = self.0;
        let mut i = 0;
        while i < BaseDimension::COUNT {
            r[i] = r[i].saturating_mul(n);
            i += 1;
        }
        Self(r)
    }

    /// Dimension of the reciprocal of a quantity.
    pub const fn inverse(self) -> Self {
        self.powi(-1)
    }
}

impl Mul<Dimension> for Dimension {
    type Output = Dimension;
    fn mul(self, rhs: Dimension) -> Dimension {
        self.product(rhs)
    }
}

impl Div<Dimension> for Dimension {
    type Output = Dimension;
    fn div(self, rhs: Dimension) -> Dimension {
        self.quotient(rhs)
    }
}

/* Formatted as the SI unit of the dimension, eg. kg⋅m²/s³. */
impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        let factors = |sign: i8| {
            DISPLAY_ORDER
                .iter()
                .filter(|b| self.exponent(**b).signum() == sign)
                .map(|b| {
                    format!(
                        "{}{}",
                        b.symbol(),
                        superscript(self.exponent(*b).unsigned_abs())
                    )
                })
                .collect::<Vec<String>>()
        };

        let num = factors(1);
        let denom = factors(-1);

        match num.is_empty() {
            true => write!(f, "1")?,
            false => write!(f, "{}", num.join("\u{22c5}"))?,
        }
        if !denom.is_empty() {
            write!(f, "/{}", denom.join("\u{22c5}"))?;
        }
        Ok(())
    }
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

fn superscript(val: u8) -> String {
    if val != 1 {
        val.to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(n) => SS[n as usize],
                None => c,
            })
            .collect()
    } else {
        "".to_string()
    }
}
