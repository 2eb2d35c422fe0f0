//! Property tests for digit-string decoding

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir_recon::codec::decode_share;

const ALPHABET_62: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// A base in 2..=36
#[derive(Clone, Copy, Debug)]
struct SmallBase(u32);

impl Arbitrary for SmallBase {
    fn arbitrary(g: &mut Gen) -> Self {
        SmallBase(u32::from(u8::arbitrary(g) % 35) + 2)
    }
}

/// A base in 37..=62
#[derive(Clone, Copy, Debug)]
struct LargeBase(u32);

impl Arbitrary for LargeBase {
    fn arbitrary(g: &mut Gen) -> Self {
        LargeBase(u32::from(u8::arbitrary(g) % 26) + 37)
    }
}

/// Spells `value` with the case-sensitive 62-digit alphabet
fn to_large_radix(value: &BigInt, base: u32) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    let digits: String = value
        .magnitude()
        .to_radix_be(base)
        .into_iter()
        .map(|d| char::from(ALPHABET_62[usize::from(d)]))
        .collect();
    if value.is_negative() {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Test that decoding agrees with num-bigint's own radix formatting
#[quickcheck]
fn prop_decode_matches_to_str_radix(a: i64, b: i64, base: SmallBase) -> bool {
    let value = BigInt::from(a) * BigInt::from(b);
    let lower = value.to_str_radix(base.0);
    let upper = lower.to_uppercase();
    decode_share(base.0, &lower) == Ok(value.clone()) && decode_share(base.0, &upper) == Ok(value)
}

/// Test decoding in bases above 36
#[quickcheck]
fn prop_decode_large_bases(a: i64, b: i64, base: LargeBase) -> bool {
    let value = BigInt::from(a) * BigInt::from(b);
    decode_share(base.0, &to_large_radix(&value, base.0)) == Ok(value)
}

/// Test that a digit equal to the base is always rejected
#[quickcheck]
fn prop_out_of_range_digit_rejected(a: u32, base: SmallBase) -> bool {
    if base.0 == 36 {
        return true;
    }
    let bad_digit = char::from(ALPHABET_62[base.0 as usize]).to_ascii_lowercase();
    let text = format!("{}{bad_digit}", BigInt::from(a).to_str_radix(base.0));
    decode_share(base.0, &text).is_err()
}
