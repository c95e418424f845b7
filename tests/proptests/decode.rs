//! Property tests for base-N share value decoding

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use unshard::codec;

const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Wrapper generating a valid (base, digit string) pair
#[derive(Clone, Debug)]
struct EncodedValue {
    base: u32,
    digits: String,
}

impl Arbitrary for EncodedValue {
    fn arbitrary(g: &mut Gen) -> Self {
        let base = u32::from(u8::arbitrary(g) % 35) + 2; // 2..=36
        let len = usize::from(u8::arbitrary(g) % 40) + 1; // 1..=40 digits
        let digits: String = (0..len)
            .map(|_| {
                let digit = usize::from(u8::arbitrary(g)) % base as usize;
                DIGITS[digit] as char
            })
            .collect();
        EncodedValue { base, digits }
    }
}

/// Decoding then re-encoding reproduces the digit string modulo leading zeros
#[quickcheck]
fn prop_decode_round_trip(encoded: EncodedValue) -> bool {
    let EncodedValue { base, digits } = encoded;
    let Ok(value) = codec::decode_value(&digits, base) else {
        return false;
    };

    let normalized = digits.trim_start_matches('0');
    let normalized = if normalized.is_empty() { "0" } else { normalized };
    value.to_str_radix(base) == normalized
}

/// Uppercasing the digit string never changes the decoded value
#[quickcheck]
fn prop_decode_case_insensitive(encoded: EncodedValue) -> bool {
    let EncodedValue { base, digits } = encoded;
    codec::decode_value(&digits.to_uppercase(), base).ok()
        == codec::decode_value(&digits, base).ok()
}

/// A digit at or above the base is always rejected
#[quickcheck]
fn prop_out_of_range_digit_rejected(encoded: EncodedValue, position: usize) -> bool {
    let EncodedValue { base, digits } = encoded;
    if base == 36 {
        return true; // every letter digit is valid in base 36
    }

    // Overwrite one digit with the first digit beyond the base
    let bad_digit = DIGITS[base as usize] as char;
    let mut corrupted: Vec<char> = digits.chars().collect();
    let slot = position % corrupted.len();
    corrupted[slot] = bad_digit;
    let corrupted: String = corrupted.into_iter().collect();

    codec::decode_value(&corrupted, base).is_err()
}

/// Bases outside 2..=36 are rejected by both entry points
#[quickcheck]
fn prop_unsupported_base_rejected(base: u32) -> bool {
    if (2..=36).contains(&base) {
        return true;
    }
    codec::decode_value("1", base).is_err() && codec::parse_base(&base.to_string()).is_err()
}
