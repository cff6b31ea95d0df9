/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use log::trace;
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{map_res, opt, recognize, value},
    sequence::tuple,
    IResult,
};

use super::error::{ParseFailure, QuantityError};
use super::quantity::Quantity;
use super::registry::{QuantityUnits, Registry};
use super::unit::{Unit, UnitInfo};

/// Parse "<number> <abbreviation>" into a value and a unit of `U`. A
/// bare number is read in the reference unit if that unit has no
/// abbreviation (eg. dimensionless "5").
pub fn parse_scalar<U: Unit>(input: &str) -> Result<(f64, U), QuantityError> {
    let (value, abbreviation) = split_number(U::QUANTITY, input)?;
    if abbreviation.is_empty() {
        return match U::REFERENCE.abbreviations().is_empty() {
            true => Ok((value, U::REFERENCE)),
            false => Err(missing_unit(U::QUANTITY, input)),
        };
    }
    let unit = Registry::get()
        .resolve::<U>(abbreviation)
        .ok_or_else(|| unknown_unit(U::QUANTITY, input, abbreviation))?;
    Ok((value, unit))
}

/// Resolve a unit abbreviation of `U`.
pub fn parse_unit<U: Unit>(abbreviation: &str) -> Result<U, QuantityError> {
    let abbreviation = non_empty_abbreviation(U::QUANTITY, abbreviation)?;
    Registry::get()
        .resolve::<U>(abbreviation)
        .ok_or_else(|| unknown_unit(U::QUANTITY, abbreviation, abbreviation))
}

/// Parse a scalar of a quantity that is only known at runtime.
pub fn parse_scalar_info(
    quantity: Quantity,
    input: &str,
) -> Result<(f64, &'static UnitInfo), QuantityError> {
    let units = registered(quantity)?;
    let (value, abbreviation) = split_number(quantity, input)?;
    if abbreviation.is_empty() {
        return match units.reference().abbreviations.is_empty() {
            true => Ok((value, units.reference())),
            false => Err(missing_unit(quantity, input)),
        };
    }
    let unit = units
        .resolve(abbreviation)
        .ok_or_else(|| unknown_unit(quantity, input, abbreviation))?;
    Ok((value, unit))
}

/// Resolve a unit abbreviation of a quantity that is only known at
/// runtime.
pub fn parse_unit_info(
    quantity: Quantity,
    abbreviation: &str,
) -> Result<&'static UnitInfo, QuantityError> {
    let units = registered(quantity)?;
    let abbreviation = non_empty_abbreviation(quantity, abbreviation)?;
    units
        .resolve(abbreviation)
        .ok_or_else(|| unknown_unit(quantity, abbreviation, abbreviation))
}

/// Split text into the leading number and the (trimmed) remainder.
/// The remainder is not resolved.
pub fn split_scalar(
    quantity: Quantity,
    input: &str,
) -> Result<(f64, &str), QuantityError> {
    match split_number(quantity, input)? {
        (_, "") => Err(missing_unit(quantity, input)),
        split => Ok(split),
    }
}

/* Like `split_scalar`, but the remainder may be empty. */
fn split_number(
    quantity: Quantity,
    input: &str,
) -> Result<(f64, &str), QuantityError> {
    let text = input.trim();
    if text.is_empty() {
        trace!("rejected empty {} input", quantity);
        return Err(QuantityError::InvalidArgument(format!(
            "empty text for {}",
            quantity
        )));
    }

    let (rest, value) = decimal_value(text).map_err(|e| {
        trace!("no number in {} input '{}': {}", quantity, input, e);
        parse_error(quantity, input, ParseFailure::Number)
    })?;

    Ok((value, rest.trim()))
}

/// Parser for numbers: an optional sign followed by either a decimal
/// number (with '.' or ',' as decimal separator and an optional
/// exponent) or one of NaN, Inf and Infinity.
pub fn decimal_value(input: &str) -> IResult<&str, f64> {
    let (input, (sign, n)) =
        tuple((opt(sign), alt((special_value, finite_value))))(input)?;
    Ok((input, sign.unwrap_or(1.0) * n))
}

fn finite_value(input: &str) -> IResult<&str, f64> {
    map_res(recognize(tuple((mantissa, opt(exponent)))), |s: &str| {
        s.replace(',', ".").parse::<f64>()
    })(input)
}

fn mantissa(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((digit1, opt(tuple((separator, digit0)))))),
        recognize(tuple((separator, digit1))),
    ))(input)
}

fn exponent(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(input)
}

fn special_value(input: &str) -> IResult<&str, f64> {
    alt((
        value(f64::NAN, tag_no_case("nan")),
        value(f64::INFINITY, tag_no_case("infinity")),
        value(f64::INFINITY, tag_no_case("inf")),
    ))(input)
}

fn separator(input: &str) -> IResult<&str, char> {
    one_of(".,")(input)
}

fn sign(input: &str) -> IResult<&str, f64> {
    alt((value(-1.0, char('-')), value(1.0, char('+'))))(input)
}

fn registered(
    quantity: Quantity,
) -> Result<&'static QuantityUnits, QuantityError> {
    Registry::get().units(quantity).ok_or_else(|| {
        QuantityError::InvalidArgument(format!(
            "no units registered for {}",
            quantity
        ))
    })
}

fn non_empty_abbreviation(
    quantity: Quantity,
    abbreviation: &str,
) -> Result<&str, QuantityError> {
    match abbreviation.trim() {
        "" => Err(QuantityError::InvalidArgument(format!(
            "empty unit abbreviation for {}",
            quantity
        ))),
        a => Ok(a),
    }
}

fn missing_unit(quantity: Quantity, text: &str) -> QuantityError {
    trace!("no unit in {} input '{}'", quantity, text);
    parse_error(quantity, text, ParseFailure::MissingUnit)
}

fn unknown_unit(
    quantity: Quantity,
    text: &str,
    abbreviation: &str,
) -> QuantityError {
    trace!("unknown {} unit '{}' in '{}'", quantity, abbreviation, text);
    parse_error(
        quantity,
        text,
        ParseFailure::UnknownUnit(abbreviation.to_string()),
    )
}

fn parse_error(
    quantity: Quantity,
    text: &str,
    reason: ParseFailure,
) -> QuantityError {
    QuantityError::Parse {
        quantity,
        text: text.to_string(),
        reason,
    }
}
