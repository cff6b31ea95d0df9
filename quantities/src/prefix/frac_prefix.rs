/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::prefix_trait::Prefix;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Fractional Prefixes (eg. for seconds).
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
pub enum FracPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Unit,
}

impl Prefix for FracPrefix {
    const BASE: u64 = 1000;
    const SCALE: &'static [Self] = &[
        Self::Yocto,
        Self::Zepto,
        Self::Atto,
        Self::Femto,
        Self::Pico,
        Self::Nano,
        Self::Micro,
        Self::Milli,
        Self::Unit,
    ];

    fn power(&self) -> i64 {
        match self {
            FracPrefix::Yocto => -8,
            FracPrefix::Zepto => -7,
            FracPrefix::Atto => -6,
            FracPrefix::Femto => -5,
            FracPrefix::Pico => -4,
            FracPrefix::Nano => -3,
            FracPrefix::Micro => -2,
            FracPrefix::Milli => -1,
            FracPrefix::Unit => 0,
        }
    }

    fn prefix(&self) -> &'static str {
        self.prefixes()[0]
    }

    fn name(&self) -> &'static str {
        match self {
            FracPrefix::Yocto => "yocto",
            FracPrefix::Zepto => "zepto",
            FracPrefix::Atto => "atto",
            FracPrefix::Femto => "femto",
            FracPrefix::Pico => "pico",
            FracPrefix::Nano => "nano",
            FracPrefix::Micro => "micro",
            FracPrefix::Milli => "milli",
            FracPrefix::Unit => "",
        }
    }

    fn prefixes(&self) -> &'static [&'static str] {
        match self {
            FracPrefix::Yocto => &["y"],
            FracPrefix::Zepto => &["z"],
            FracPrefix::Atto => &["a"],
            FracPrefix::Femto => &["f"],
            FracPrefix::Pico => &["p"],
            FracPrefix::Nano => &["n"],
            FracPrefix::Micro => &["µ", "μ", "u"],
            FracPrefix::Milli => &["m"],
            FracPrefix::Unit => &[""],
        }
    }
}

impl Display for FracPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.prefix())
    }
}
