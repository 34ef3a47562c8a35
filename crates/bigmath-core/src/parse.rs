// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Literal Reader
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Numeric literals: integers in the input base, exact decimals and `a/b`
//! rationals.
//!
//! In bases above 10 the letter `e` is a digit, so decimal exponents are
//! only recognised in base 10 or when the literal has a decimal point.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use bigmath_math::convert::parse_decimal;
use bigmath_types::error::{MathError, MathResult};
use bigmath_types::value::Value;

fn bad(text: &str, why: &str) -> MathError {
    MathError::Parse(format!("{why}: {text:?}"))
}

fn parse_integer(text: &str, base: u32) -> MathResult<BigInt> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(bad(text, "bad integer"));
    }
    let n = BigInt::parse_bytes(digits.as_bytes(), base)
        .ok_or_else(|| bad(text, &format!("bad base-{base} integer")))?;
    Ok(if negative { -n } else { n })
}

fn parse_scalar(text: &str, base: u32) -> MathResult<BigRational> {
    if base == 10 || text.contains('.') {
        parse_decimal(text).ok_or_else(|| bad(text, "bad number"))
    } else {
        parse_integer(text, base).map(BigRational::from_integer)
    }
}

/// Parse `text` as a number in `ibase` (0 means 10), shrunk to the
/// narrowest value kind.
pub fn parse_number(text: &str, ibase: u32) -> MathResult<Value> {
    let base = if ibase == 0 { 10 } else { ibase };
    if !(2..=36).contains(&base) {
        return Err(MathError::ConfigError(format!("input base {base} out of range")));
    }
    let text = text.trim();
    if text.is_empty() {
        return Err(MathError::Parse("empty number".into()));
    }
    let r = match text.split_once('/') {
        Some((num, den)) => {
            let num = parse_scalar(num.trim(), base)?;
            let den = parse_scalar(den.trim(), base)?;
            if den.is_zero() {
                return Err(MathError::Parse(format!("zero denominator: {text:?}")));
            }
            num / den
        }
        None => parse_scalar(text, base)?,
    };
    Ok(Value::from(r))
}
