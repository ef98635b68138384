// ============================================================================
// Amount Formatting
// Rendering and parsing of decimal amounts with digit grouping
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Render a decimal amount.
///
/// Whole numbers are printed without a fractional part. Anything else is
/// rounded (midpoint away from zero) to exactly `fraction_digits` places.
/// When `group_separator` is set, the integer digits are split into groups
/// of three.
///
/// # Examples
/// - `1000` -> `"1,000"`
/// - `1.2` -> `"1.20"`
/// - `1.2345` -> `"1.23"`
pub fn render_amount(
    value: Decimal,
    fraction_digits: u32,
    group_separator: Option<char>,
) -> String {
    let scale = if value.fract().is_zero() {
        0
    } else {
        fraction_digits
    };

    // Near Decimal::MAX there is no room for extra scale, so the fraction is
    // padded as text below instead of rescaling
    let mut rounded =
        value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // -0.001 rounds to zero and must not keep its sign
        rounded.set_sign_positive(true);
    }

    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let width = scale as usize;
    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + width);
    out.push_str(sign);
    match group_separator {
        Some(separator) => push_grouped(&mut out, int_part, separator),
        None => out.push_str(int_part),
    }
    if width > 0 {
        let frac = frac_part.unwrap_or("");
        out.push('.');
        out.push_str(frac);
        out.extend(std::iter::repeat_n('0', width.saturating_sub(frac.len())));
    }
    out
}

fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
}

/// Parse an amount produced by [`render_amount`].
///
/// Accepts an optional sign, integer digits (optionally grouped with
/// `group_separator` in groups of three) and an optional fractional part.
///
/// # Errors
/// Returns `InvalidInput` for misplaced separators, stray characters or
/// values the decimal representation cannot hold.
pub fn parse_amount(input: &str, group_separator: char) -> MoneyResult<Decimal> {
    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let digits = ungroup(int_part, group_separator).ok_or(MoneyError::InvalidInput)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::InvalidInput);
    }

    let mut normalized = String::with_capacity(unsigned.len() + 1);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(&digits);

    if let Some(frac) = frac_part {
        if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MoneyError::InvalidInput);
        }
        normalized.push('.');
        normalized.push_str(frac);
    }

    Decimal::from_str(&normalized).map_err(|_| MoneyError::InvalidInput)
}

/// Strip group separators, checking that every group after the first has
/// exactly three digits.
fn ungroup(int_part: &str, separator: char) -> Option<String> {
    if !int_part.contains(separator) {
        return Some(int_part.to_string());
    }

    let mut groups = int_part.split(separator);
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 {
        return None;
    }

    let mut out = first.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        out.push_str(group);
    }
    Some(out)
}
