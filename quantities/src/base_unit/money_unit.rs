/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::super::quantity::Quantity;
use super::super::unit::{owned, RelativeUnit, Unit};
use super::base_units::MONEY_UNITS;

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
pub enum MoneyUnit {
    Euro,
    Cent,
}

impl Unit for MoneyUnit {
    const QUANTITY: Quantity = Quantity::Money;
    const LIST: &'static [Self] = &MONEY_UNITS;
    const REFERENCE: Self = MoneyUnit::Euro;

    fn name(&self) -> String {
        match self {
            MoneyUnit::Euro => "euro".to_string(),
            MoneyUnit::Cent => "cent".to_string(),
        }
    }

    fn abbreviations(&self) -> Vec<String> {
        match self {
            MoneyUnit::Euro => owned(&["€", "EUR"]),
            MoneyUnit::Cent => owned(&["ct"]),
        }
    }

    fn multiplier(&self) -> f64 {
        match self {
            MoneyUnit::Euro => 1.0,
            MoneyUnit::Cent => 0.01,
        }
    }
}

impl RelativeUnit for MoneyUnit {}

impl Display for MoneyUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            MoneyUnit::Euro => write!(f, "€"),
            MoneyUnit::Cent => write!(f, "ct"),
        }
    }
}
