/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::prefix_trait::Prefix;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

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
pub enum SiPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Unit,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

static SI_PREFIXES: [SiPrefix; 21] = [
    SiPrefix::Yocto,
    SiPrefix::Zepto,
    SiPrefix::Atto,
    SiPrefix::Femto,
    SiPrefix::Pico,
    SiPrefix::Nano,
    SiPrefix::Micro,
    SiPrefix::Milli,
    SiPrefix::Centi,
    SiPrefix::Deci,
    SiPrefix::Unit,
    SiPrefix::Deca,
    SiPrefix::Hecto,
    SiPrefix::Kilo,
    SiPrefix::Mega,
    SiPrefix::Giga,
    SiPrefix::Tera,
    SiPrefix::Peta,
    SiPrefix::Exa,
    SiPrefix::Zetta,
    SiPrefix::Yotta,
];

impl SiPrefix {
    /// Prefixes in common use for squared and cubed lengths.
    pub const METRIC: &'static [Self] = &[
        SiPrefix::Milli,
        SiPrefix::Centi,
        SiPrefix::Deci,
        SiPrefix::Unit,
        SiPrefix::Kilo,
    ];

    /// Prefixes in common use for liters.
    pub const LITER: &'static [Self] = &[
        SiPrefix::Milli,
        SiPrefix::Centi,
        SiPrefix::Deci,
        SiPrefix::Unit,
        SiPrefix::Hecto,
    ];

    /// Prefixes in common use for watt-hours and ampere-hours.
    pub const ENGINEERING: &'static [Self] = &[
        SiPrefix::Milli,
        SiPrefix::Unit,
        SiPrefix::Kilo,
        SiPrefix::Mega,
        SiPrefix::Giga,
        SiPrefix::Tera,
    ];
}

impl Prefix for SiPrefix {
    const BASE: u64 = 10;
    const SCALE: &'static [Self] = &SI_PREFIXES;

    fn power(&self) -> i64 {
        match self {
            SiPrefix::Yocto => -24,
            SiPrefix::Zepto => -21,
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Centi => -2,
            SiPrefix::Deci => -1,
            SiPrefix::Unit => 0,
            SiPrefix::Deca => 1,
            SiPrefix::Hecto => 2,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
            SiPrefix::Zetta => 21,
            SiPrefix::Yotta => 24,
        }
    }

    fn prefix(&self) -> &'static str {
        self.prefixes()[0]
    }

    fn name(&self) -> &'static str {
        match self {
            SiPrefix::Yocto => "yocto",
            SiPrefix::Zepto => "zepto",
            SiPrefix::Atto => "atto",
            SiPrefix::Femto => "femto",
            SiPrefix::Pico => "pico",
            SiPrefix::Nano => "nano",
            SiPrefix::Micro => "micro",
            SiPrefix::Milli => "milli",
            SiPrefix::Centi => "centi",
            SiPrefix::Deci => "deci",
            SiPrefix::Unit => "",
            SiPrefix::Deca => "deca",
            SiPrefix::Hecto => "hecto",
            SiPrefix::Kilo => "kilo",
            SiPrefix::Mega => "mega",
            SiPrefix::Giga => "giga",
            SiPrefix::Tera => "tera",
            SiPrefix::Peta => "peta",
            SiPrefix::Exa => "exa",
            SiPrefix::Zetta => "zetta",
            SiPrefix::Yotta => "yotta",
        }
    }

    fn prefixes(&self) -> &'static [&'static str] {
        match self {
            SiPrefix::Yocto => &["y"],
            SiPrefix::Zepto => &["z"],
            SiPrefix::Atto => &["a"],
            SiPrefix::Femto => &["f"],
            SiPrefix::Pico => &["p"],
            SiPrefix::Nano => &["n"],
            SiPrefix::Micro => &["µ", "μ", "u"],
            SiPrefix::Milli => &["m"],
            SiPrefix::Centi => &["c"],
            SiPrefix::Deci => &["d"],
            SiPrefix::Unit => &[""],
            SiPrefix::Deca => &["da"],
            SiPrefix::Hecto => &["h"],
            SiPrefix::Kilo => &["k"],
            SiPrefix::Mega => &["M"],
            SiPrefix::Giga => &["G"],
            SiPrefix::Tera => &["T"],
            SiPrefix::Peta => &["P"],
            SiPrefix::Exa => &["E"],
            SiPrefix::Zetta => &["Z"],
            SiPrefix::Yotta => &["Y"],
        }
    }
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.prefix())
    }
}
