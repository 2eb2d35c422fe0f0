//! Exact Lagrange interpolation over the integers
//!
//! The secret is the constant term f(0) of the polynomial through k shares:
//!
//! ```text
//! f(0) = Σᵢ yᵢ · Πⱼ≠ᵢ (0 − xⱼ) / (xᵢ − xⱼ)
//! ```
//!
//! Individual terms are rarely integers, so the sum is accumulated as a single
//! [`Fraction`] by cross-multiplication and divided exactly once at the end. A
//! non-zero remainder means the shares do not lie on a common integer polynomial.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//! use shamir_recon::domain::{Point, Threshold};
//! use shamir_recon::interpolate::interpolate_at_zero;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // y = 6x - 3
//! let points = [Point::new(1, 3), Point::new(2, 9)];
//! let secret = interpolate_at_zero(&points, Threshold::new(2)?)?;
//! assert_eq!(secret, BigInt::from(-3));
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::domain::{Point, Threshold};
use crate::error::RecoverError;

/// An unreduced rational `numerator / denominator`
///
/// The denominator is a product of differences of distinct x-coordinates and is
/// therefore never zero. The sign may sit on either part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// The additive identity `0 / 1`
    #[must_use]
    pub fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Adds `numerator / denominator` without reducing
    fn accumulate(&mut self, numerator: &BigInt, denominator: &BigInt) {
        self.numerator = &self.numerator * denominator + numerator * &self.denominator;
        self.denominator = &self.denominator * denominator;
    }

    /// Whether the fraction equals the integer `value`
    #[must_use]
    pub fn equals_integer(&self, value: &BigInt) -> bool {
        self.numerator == value * &self.denominator
    }

    /// Divides exactly, or fails with [`RecoverError::InconsistentShareSet`]
    ///
    /// # Errors
    /// Returns [`RecoverError::InconsistentShareSet`] when the remainder is non-zero
    pub fn into_integer(self) -> Result<BigInt, RecoverError> {
        if !(&self.numerator % &self.denominator).is_zero() {
            return Err(RecoverError::InconsistentShareSet {
                numerator: self.numerator,
                denominator: self.denominator,
            });
        }
        Ok(self.numerator / self.denominator)
    }
}

fn ensure_distinct_x(points: &[Point]) -> Result<(), RecoverError> {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(&point.x) {
            return Err(RecoverError::DuplicateXCoordinate { x: point.x.clone() });
        }
    }
    Ok(())
}

/// Lagrange sum of `points` evaluated at `at`
///
/// Callers must have checked that all x-coordinates are distinct.
fn lagrange_sum(points: &[Point], at: &BigInt) -> Fraction {
    let mut total = Fraction::zero();

    for (i, point) in points.iter().enumerate() {
        let mut numerator = point.y.clone();
        let mut denominator = BigInt::one();

        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= at - &other.x;
            denominator *= &point.x - &other.x;
        }

        trace!(x = %point.x, %numerator, %denominator, "lagrange term");
        total.accumulate(&numerator, &denominator);
    }

    total
}

/// Reconstructs f(0) from the first `threshold` points
///
/// Which points come first is the caller's choice: any k points of a consistent
/// share set yield the same value.
///
/// # Errors
/// - [`RecoverError::InsufficientShares`] if fewer than `threshold` points are given
/// - [`RecoverError::DuplicateXCoordinate`] if two of the selected points share an x
/// - [`RecoverError::InconsistentShareSet`] if the interpolated value is not an integer
pub fn interpolate_at_zero(points: &[Point], threshold: Threshold) -> Result<BigInt, RecoverError> {
    let k = *threshold;
    if points.len() < k {
        return Err(RecoverError::InsufficientShares {
            needed: k,
            available: points.len(),
        });
    }

    let selected = &points[..k];
    ensure_distinct_x(selected)?;

    let sum = lagrange_sum(selected, &BigInt::zero());
    debug!(
        k,
        numerator_bits = sum.numerator().bits(),
        denominator_bits = sum.denominator().bits(),
        "accumulated lagrange sum at zero"
    );
    sum.into_integer()
}

/// Evaluates the polynomial through all of `points` at `x`, as an exact fraction
///
/// # Errors
/// Returns [`RecoverError::DuplicateXCoordinate`] if two points share an x and
/// [`RecoverError::InsufficientShares`] if `points` is empty
pub fn interpolate_at(points: &[Point], x: &BigInt) -> Result<Fraction, RecoverError> {
    if points.is_empty() {
        return Err(RecoverError::InsufficientShares {
            needed: 1,
            available: 0,
        });
    }
    ensure_distinct_x(points)?;
    Ok(lagrange_sum(points, x))
}
