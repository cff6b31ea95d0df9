/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dimension::Dimension;
use super::quantity::Quantity;

#[derive(Serialize, Deserialize, Error, PartialEq, Clone, Debug)]
pub enum QuantityError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failed to parse {quantity} from '{text}': {reason}")]
    Parse {
        quantity: Quantity,
        text: String,
        reason: ParseFailure,
    },
    #[error("interpolation ratio {ratio} outside [0, 1] for {quantity}")]
    OutOfRange { quantity: Quantity, ratio: f64 },
    #[error("duplicate abbreviation '{abbreviation}' for {quantity}")]
    DuplicateRegistration {
        quantity: Quantity,
        abbreviation: String,
    },
    #[error("units for {0} are already registered")]
    AlreadyRegistered(Quantity),
    #[error("invalid reference unit {unit} for {quantity}")]
    InvalidReference { quantity: Quantity, unit: String },
    #[error("incompatible dimensions: {0} <-> {1}")]
    Incompatible(Dimension, Dimension),
}

/// The part of a textual scalar that could not be understood.
#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum ParseFailure {
    #[error("no numeric value")]
    Number,
    #[error("missing unit")]
    MissingUnit,
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
}
