//! # Fixed-Point Decimal Conversion
//!
//! Exact conversion between decimal text and scaled integers. No binary
//! floating point is involved, so the same text yields the same integer on
//! every platform.
//!
//! Rounding is to the nearest integer tick with ties away from zero, which
//! is how users expect CAD dimensions to round.

use crate::error::DecimalError;

/// Parse decimal text (`-1.25`, `+0.5`, `3`, `.5`) into an integer scaled by
/// `10^decimals`.
///
/// Digits beyond `decimals` places are rounded half away from zero.
///
/// ## Errors
///
/// Fails on empty input, stray characters (including exponents) and values
/// that do not fit into an `i64` after scaling.
pub fn parse_fixed(text: &str, decimals: u32) -> Result<i64, DecimalError> {
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let overflow = || DecimalError::Overflow {
        text: text.to_string(),
    };

    let mut magnitude: i128 = 0;
    let mut fraction_digits = 0_u32;
    let mut round_up = false;
    let mut seen_point = false;
    let mut seen_digit = false;

    for c in body.chars() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                let digit = i128::from(c as u8 - b'0');
                if !seen_point {
                    magnitude = magnitude
                        .checked_mul(10)
                        .and_then(|m| m.checked_add(digit))
                        .filter(|m| *m <= i128::from(i64::MAX))
                        .ok_or_else(overflow)?;
                } else if fraction_digits < decimals {
                    magnitude = magnitude * 10 + digit;
                    fraction_digits += 1;
                } else if fraction_digits == decimals {
                    // First dropped digit decides the rounding direction.
                    round_up = digit >= 5;
                    fraction_digits += 1;
                }
            }
            '.' if !seen_point => seen_point = true,
            character => {
                return Err(DecimalError::InvalidCharacter {
                    character,
                    text: text.to_string(),
                });
            }
        }
    }

    if !seen_digit {
        return Err(DecimalError::Empty);
    }

    let kept = fraction_digits.min(decimals);
    magnitude *= 10_i128.pow(decimals - kept);
    if round_up {
        magnitude += 1;
    }

    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map_err(|_| overflow())
}

/// Format an integer scaled by `10^decimals` as decimal text.
///
/// Trailing fractional zeros are trimmed, keeping at least one digit after
/// the point: `1_100_000` with six decimals is `1.1`, zero is `0.0`.
pub fn format_fixed(value: i64, decimals: u32) -> String {
    let scale = 10_u64.pow(decimals);
    let magnitude = value.unsigned_abs();
    let whole = magnitude / scale;
    let fraction = magnitude % scale;

    let mut digits = format!("{fraction:0width$}", width = decimals as usize);
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push('0');
    }

    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{whole}.{digits}")
}

/// Compute `value * numerator / denominator` rounded half away from zero.
///
/// Intermediate math uses 128 bits; results beyond the `i64` range
/// saturate. `denominator` must be positive.
pub fn mul_div_round(value: i64, numerator: i64, denominator: i64) -> i64 {
    debug_assert!(denominator > 0, "denominator must be positive");
    let product = i128::from(value) * i128::from(numerator);
    let denominator = i128::from(denominator);
    let half = denominator / 2;
    let quotient = if product >= 0 {
        (product + half) / denominator
    } else {
        (product - half) / denominator
    };
    // Even denominators: `half` is exact, so ties land on the far side.
    // Odd denominators have no exact ties.
    quotient.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

// =============================================================================
// TESTS
// =============================================================================
