/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::super::dimension::Dimension;
use super::super::error::QuantityError;
use super::super::quantity::Quantity;
use super::super::unit::{AbsoluteUnit, RelativeUnit};
use super::{Absolute, Relative, Scalar};

/// A canonical value tagged with its dimension, for results that
/// have no named quantity (or whose quantity is not known
/// statically).
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct SIScalar {
    si: f64,
    dimension: Dimension,
}

impl SIScalar {
    pub fn new(si: f64, dimension: Dimension) -> Self {
        Self { si, dimension }
    }

    pub fn si(&self) -> f64 {
        self.si
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The named relative quantity with this dimension, if any.
    pub fn quantity(&self) -> Option<Quantity> {
        Quantity::from_dimension(self.dimension)
    }

    /// Convert to a typed scalar of a quantity with the same
    /// dimension.
    pub fn as_quantity<U: RelativeUnit>(
        &self,
    ) -> Result<Relative<U>, QuantityError> {
        self.check(U::QUANTITY.dimension())?;
        Ok(Relative::from_si(self.si))
    }

    pub fn as_absolute<U: AbsoluteUnit>(
        &self,
    ) -> Result<Absolute<U>, QuantityError> {
        self.check(U::QUANTITY.dimension())?;
        Ok(Absolute::from_si(self.si))
    }

    /* Not `PartialOrd`: comparing different dimensions is an error,
     * not an unordered pair. */
    pub fn partial_cmp(
        &self,
        rhs: &Self,
    ) -> Result<Option<Ordering>, QuantityError> {
        self.check(rhs.dimension)?;
        Ok(self.si.partial_cmp(&rhs.si))
    }

    fn check(&self, dimension: Dimension) -> Result<(), QuantityError> {
        match self.dimension == dimension {
            true => Ok(()),
            false => {
                Err(QuantityError::Incompatible(self.dimension, dimension))
            }
        }
    }
}

impl Scalar for SIScalar {
    fn si(&self) -> f64 {
        self.si
    }

    fn dimension(&self) -> Dimension {
        self.dimension
    }
}

impl<U: RelativeUnit> From<Relative<U>> for SIScalar {
    fn from(value: Relative<U>) -> Self {
        value.to_si_scalar()
    }
}

impl<U: AbsoluteUnit> From<Absolute<U>> for SIScalar {
    fn from(value: Absolute<U>) -> Self {
        SIScalar::new(value.si(), value.dimension())
    }
}

impl Display for SIScalar {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.si)?,
            None => write!(f, "{}", self.si)?,
        }
        if !self.dimension.is_dimensionless() {
            write!(f, " {}", self.dimension)?;
        }
        Ok(())
    }
}

impl Add<SIScalar> for SIScalar {
    type Output = Result<SIScalar, QuantityError>;
    fn add(self, rhs: SIScalar) -> Result<SIScalar, QuantityError> {
        self.check(rhs.dimension)?;
        Ok(SIScalar::new(self.si + rhs.si, self.dimension))
    }
}

impl Sub<SIScalar> for SIScalar {
    type Output = Result<SIScalar, QuantityError>;
    fn sub(self, rhs: SIScalar) -> Result<SIScalar, QuantityError> {
        self.check(rhs.dimension)?;
        Ok(SIScalar::new(self.si - rhs.si, self.dimension))
    }
}

impl Neg for SIScalar {
    type Output = SIScalar;
    fn neg(self) -> SIScalar {
        SIScalar::new(-self.si, self.dimension)
    }
}

impl Mul<SIScalar> for SIScalar {
    type Output = SIScalar;
    fn mul(self, rhs: SIScalar) -> SIScalar {
        SIScalar::new(self.si * rhs.si, self.dimension * rhs.dimension)
    }
}

impl Div<SIScalar> for SIScalar {
    type Output = SIScalar;
    fn div(self, rhs: SIScalar) -> SIScalar {
        SIScalar::new(self.si / rhs.si, self.dimension / rhs.dimension)
    }
}

impl Mul<f64> for SIScalar {
    type Output = SIScalar;
    fn mul(self, rhs: f64) -> SIScalar {
        SIScalar::new(self.si * rhs, self.dimension)
    }
}

impl Div<f64> for SIScalar {
    type Output = SIScalar;
    fn div(self, rhs: f64) -> SIScalar {
        SIScalar::new(self.si / rhs, self.dimension)
    }
}
