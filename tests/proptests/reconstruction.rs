//! Property tests for interpolation over random integer polynomials

use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir_recon::RecoverError;
use shamir_recon::domain::{Point, Threshold};
use shamir_recon::interpolate::{interpolate_at, interpolate_at_zero};

/// A random integer polynomial of degree k - 1 together with n >= k shares
#[derive(Clone, Debug)]
struct SharedPolynomial {
    /// Coefficients, constant term first
    coefficients: Vec<BigInt>,
    shares: Vec<Point>,
}

impl SharedPolynomial {
    fn threshold(&self) -> Threshold {
        Threshold::new(self.coefficients.len()).unwrap()
    }

    fn secret(&self) -> &BigInt {
        &self.coefficients[0]
    }
}

/// Horner evaluation
fn evaluate(coefficients: &[BigInt], x: &BigInt) -> BigInt {
    coefficients
        .iter()
        .rev()
        .fold(BigInt::from(0), |acc, c| acc * x + c)
}

/// A coefficient of up to ~128 bits, either sign
fn arbitrary_coefficient(g: &mut Gen) -> BigInt {
    BigInt::from(i64::arbitrary(g)) * BigInt::from(i64::arbitrary(g)) + BigInt::from(i8::arbitrary(g))
}

impl Arbitrary for SharedPolynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        // k in 2..=8, n in k..=k+4 (keep it reasonable for testing)
        let k = usize::from(u8::arbitrary(g) % 7) + 2;
        let n = k + usize::from(u8::arbitrary(g) % 5);

        let coefficients: Vec<BigInt> = (0..k).map(|_| arbitrary_coefficient(g)).collect();

        // Distinct nonzero x-coordinates drawn from -40..=40
        let mut candidates: Vec<i64> = (-40..=40).filter(|x| *x != 0).collect();
        let mut shares = Vec::with_capacity(n);
        for _ in 0..n {
            let pick = usize::from(u8::arbitrary(g)) % candidates.len();
            let x = BigInt::from(candidates.swap_remove(pick));
            let y = evaluate(&coefficients, &x);
            shares.push(Point { x, y });
        }

        SharedPolynomial {
            coefficients,
            shares,
        }
    }
}

/// Test that interpolating any k shares of the polynomial returns its constant term
#[quickcheck]
fn prop_round_trip(poly: SharedPolynomial) -> bool {
    interpolate_at_zero(&poly.shares, poly.threshold()).as_ref() == Ok(poly.secret())
}

/// Test that random selections of k shares all reconstruct the same secret
#[quickcheck]
fn prop_subset_invariance(poly: SharedPolynomial, selection_seed: u64) -> bool {
    let k = *poly.threshold();
    let mut indices: Vec<usize> = (0..poly.shares.len()).collect();

    // Simple shuffle using seed
    let mut seed = selection_seed;
    for i in 0..indices.len() {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let j = (seed % (indices.len() - i) as u64) as usize + i;
        indices.swap(i, j);
    }

    let selected: Vec<Point> = indices
        .iter()
        .take(k)
        .map(|&idx| poly.shares[idx].clone())
        .collect();

    interpolate_at_zero(&selected, poly.threshold()).as_ref() == Ok(poly.secret())
}

/// Test that shares beyond the first k lie on the interpolated polynomial
#[quickcheck]
fn prop_extra_shares_verify(poly: SharedPolynomial) -> bool {
    let k = *poly.threshold();
    let (used, extra) = poly.shares.split_at(k);
    extra.iter().all(|point| {
        interpolate_at(used, &point.x)
            .map(|value| value.equals_integer(&point.y))
            .unwrap_or(false)
    })
}

/// Test that perturbing one selected share never reproduces the secret
///
/// Every Lagrange weight at zero is nonzero because no x-coordinate is zero, so
/// the change either breaks integrality or moves the result.
#[quickcheck]
fn prop_perturbed_share_changes_result(poly: SharedPolynomial, which: u8, delta: i8) -> bool {
    if delta == 0 {
        return true;
    }
    let k = *poly.threshold();
    let mut shares = poly.shares[..k].to_vec();
    let target = usize::from(which) % k;
    shares[target].y += BigInt::from(delta);

    match interpolate_at_zero(&shares, poly.threshold()) {
        Ok(secret) => &secret != poly.secret(),
        Err(RecoverError::InconsistentShareSet { .. }) => true,
        Err(_) => false,
    }
}

/// Test that fewer than k shares are reported as insufficient, not guessed
#[quickcheck]
fn prop_insufficient_shares_fail(poly: SharedPolynomial) -> bool {
    let k = *poly.threshold();
    let result = interpolate_at_zero(&poly.shares[..k - 1], poly.threshold());
    result
        == Err(RecoverError::InsufficientShares {
            needed: k,
            available: k - 1,
        })
}

/// Test that a repeated x-coordinate is rejected wherever it appears
#[quickcheck]
fn prop_duplicate_x_rejected(poly: SharedPolynomial, which: u8) -> bool {
    let k = *poly.threshold();
    let mut shares = poly.shares[..k].to_vec();
    let target = usize::from(which) % (k - 1) + 1;
    shares[target].x = shares[0].x.clone();

    matches!(
        interpolate_at_zero(&shares, poly.threshold()),
        Err(RecoverError::DuplicateXCoordinate { .. })
    )
}
