//! Share decoding: digit strings in an arbitrary base to big integers
//!
//! A share arrives as an identifier (its x-coordinate, written in decimal) and a
//! `(base, value)` pair where `value` is the y-coordinate spelled in `base`.
//!
//! # Digit alphabet
//!
//! - Bases `2..=36` use `0-9` followed by `a-z`, case-insensitive (`"FF"` == `"ff"`).
//! - Bases `37..=62` use `0-9`, `A-Z`, `a-z`, case-sensitive (`'A'` = 10, `'a'` = 36).
//!
//! A value may carry a single leading `+` or `-`.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//! use shamir_recon::codec::{decode_point, decode_share};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(decode_share(16, "ff")?, BigInt::from(255));
//! assert_eq!(decode_share(2, "101")?, BigInt::from(5));
//! assert!(decode_share(16, "g").is_err());
//!
//! let point = decode_point("6", "4", "213")?;
//! assert_eq!(point.x, BigInt::from(6));
//! assert_eq!(point.y, BigInt::from(39));
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Signed;

use crate::domain::Point;
use crate::error::{MalformedReason, RecoverError};

/// Smallest supported base
pub const MIN_BASE: u32 = 2;

/// Largest supported base (10 digits + 26 upper + 26 lower case letters)
pub const MAX_BASE: u32 = 62;

/// Bases up to this value ignore letter case
const CASE_INSENSITIVE_MAX_BASE: u32 = 36;

/// Parses a textual base such as `"16"`
///
/// Surrounding whitespace is ignored. The base must lie in `2..=62`.
///
/// # Errors
/// Returns [`MalformedReason::InvalidBase`] if the text is not a decimal integer and
/// [`MalformedReason::UnsupportedBase`] if it is out of range
pub fn parse_base(text: &str) -> Result<u32, MalformedReason> {
    let trimmed = text.trim();
    let base: u32 = trimmed
        .parse()
        .map_err(|_| MalformedReason::InvalidBase(trimmed.to_string()))?;
    check_base(base)?;
    Ok(base)
}

fn check_base(base: u32) -> Result<(), MalformedReason> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(MalformedReason::UnsupportedBase(base))
    }
}

/// Maps one character to its digit value in `base`, if it is a valid digit
fn digit_value(c: char, base: u32) -> Option<u8> {
    let value = if base <= CASE_INSENSITIVE_MAX_BASE {
        c.to_digit(base)?
    } else {
        match c {
            '0'..='9' => c as u32 - '0' as u32,
            'A'..='Z' => c as u32 - 'A' as u32 + 10,
            'a'..='z' => c as u32 - 'a' as u32 + 36,
            _ => return None,
        }
    };

    if value < base {
        // value < base <= 62
        u8::try_from(value).ok()
    } else {
        None
    }
}

/// Decodes an optionally signed digit string in `base` into a big integer
///
/// # Errors
/// Returns a [`MalformedReason`] if the base is unsupported, the value is empty or
/// contains a character that is not a digit of `base`
pub fn decode_share(base: u32, value: &str) -> Result<BigInt, MalformedReason> {
    check_base(base)?;

    let (sign, digits_str, offset) = match value.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest, 1),
        None => match value.strip_prefix('+') {
            Some(rest) => (Sign::Plus, rest, 1),
            None => (Sign::Plus, value, 0),
        },
    };

    if digits_str.is_empty() {
        return Err(MalformedReason::EmptyValue);
    }

    let digits = digits_str
        .chars()
        .enumerate()
        .map(|(position, digit)| {
            digit_value(digit, base).ok_or(MalformedReason::InvalidDigit {
                digit,
                position: position + offset,
                base,
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    // Every digit was checked against base above
    let magnitude =
        BigUint::from_radix_be(&digits, base).ok_or(MalformedReason::UnsupportedBase(base))?;

    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Decodes a share identifier: a positive decimal integer
///
/// # Errors
/// Returns [`MalformedReason::InvalidIdentifier`] if `text` is not decimal and
/// [`MalformedReason::NonPositiveIdentifier`] for zero or negative identifiers
pub fn decode_identifier(text: &str) -> Result<BigInt, MalformedReason> {
    let x = decode_share(10, text).map_err(|_| MalformedReason::InvalidIdentifier(text.into()))?;
    if !x.is_positive() {
        return Err(MalformedReason::NonPositiveIdentifier(x));
    }
    Ok(x)
}

/// Decodes one share into a [`Point`]
///
/// # Errors
/// Returns [`RecoverError::MalformedShare`] naming `id` when any part fails to decode
pub fn decode_point(id: &str, base: &str, value: &str) -> Result<Point, RecoverError> {
    let malformed = |reason| RecoverError::MalformedShare {
        id: id.to_string(),
        reason,
    };

    let x = decode_identifier(id).map_err(malformed)?;
    let base = parse_base(base).map_err(malformed)?;
    let y = decode_share(base, value).map_err(malformed)?;

    Ok(Point { x, y })
}

/// Decodes a set of `(id, base, value)` triples, sorted by x-coordinate
///
/// # Errors
/// Returns [`RecoverError::MalformedShare`] for the first share that fails to decode and
/// [`RecoverError::DuplicateXCoordinate`] when two identifiers denote the same x
/// (for example `"1"` and `"01"`)
pub fn decode_points<'a, I>(triples: I) -> Result<Vec<Point>, RecoverError>
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
{
    let mut seen = HashSet::new();
    let mut points = Vec::new();

    for (id, base, value) in triples {
        let point = decode_point(id, base, value)?;
        if !seen.insert(point.x.clone()) {
            return Err(RecoverError::DuplicateXCoordinate { x: point.x });
        }
        points.push(point);
    }

    points.sort_by(|a, b| a.x.cmp(&b.x));
    Ok(points)
}
