/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::prefix::{FracPrefix, Prefix};
use super::super::quantity::Quantity;
use super::super::unit::{owned, AbsoluteUnit, Unit};
use super::base_units::TIME_UNITS;
use super::DurationUnit;

/// Unix time of the J2000 epoch, 2000-01-01T12:00:00Z.
pub const J2000: f64 = 946_728_000.0;

/// Points in time. The reference counts seconds since the Unix epoch;
/// the J2000 units count from 2000-01-01T12:00:00Z.
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
pub enum TimeUnit {
    Second(FracPrefix),
    Minute,
    Hour,
    Day,
    Week,
    J2000Second,
    J2000Day,
}

impl Unit for TimeUnit {
    const QUANTITY: Quantity = Quantity::Time;
    const LIST: &'static [Self] = &TIME_UNITS;
    const REFERENCE: Self = TimeUnit::Second(FracPrefix::Unit);

    fn name(&self) -> String {
        match self {
            TimeUnit::Second(p) => format!("{}second", p.name()),
            TimeUnit::Minute => "minute".to_string(),
            TimeUnit::Hour => "hour".to_string(),
            TimeUnit::Day => "day".to_string(),
            TimeUnit::Week => "week".to_string(),
            TimeUnit::J2000Second => "second since J2000".to_string(),
            TimeUnit::J2000Day => "day since J2000".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            TimeUnit::Second(p) => p.abbreviations(&["s", "sec"]),
            TimeUnit::Minute => owned(&["min"]),
            TimeUnit::Hour => owned(&["h", "hr", "u"]),
            TimeUnit::Day => owned(&["day", "d", "dag"]),
            TimeUnit::Week => owned(&["wk", "week"]),
            TimeUnit::J2000Second => owned(&["s(J2000)"]),
            TimeUnit::J2000Day => owned(&["day(J2000)", "d(J2000)"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            TimeUnit::Second(p) => p.multiplier(),
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3600.0,
            TimeUnit::Day => 86400.0,
            TimeUnit::Week => 604800.0,
            TimeUnit::J2000Second => 1.0,
            TimeUnit::J2000Day => 86400.0,
        }
    }

    fn offset(&self) -> f64 {
        match self {
            TimeUnit::J2000Second => J2000,
            TimeUnit::J2000Day => J2000,
            _ => 0.0,
        }
    }
}

impl AbsoluteUnit for TimeUnit {
    type Relative = DurationUnit;

    fn relative(&self) -> DurationUnit {
        match self {
            TimeUnit::Second(p) => DurationUnit::Second(*p),
            TimeUnit::Minute => DurationUnit::Minute,
            TimeUnit::Hour => DurationUnit::Hour,
            TimeUnit::Day => DurationUnit::Day,
            TimeUnit::Week => DurationUnit::Week,
            TimeUnit::J2000Second => DurationUnit::Second(FracPrefix::Unit),
            TimeUnit::J2000Day => DurationUnit::Day,
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            TimeUnit::Second(p) => write!(f, "{}s", p),
            TimeUnit::Minute => write!(f, "min"),
            TimeUnit::Hour => write!(f, "h"),
            TimeUnit::Day => write!(f, "day"),
            TimeUnit::Week => write!(f, "wk"),
            TimeUnit::J2000Second => write!(f, "s(J2000)"),
            TimeUnit::J2000Day => write!(f, "day(J2000)"),
        }
    }
}
