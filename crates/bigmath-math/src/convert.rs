// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Conversions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Exact conversions between big integers, rationals, decimal text and
//! `BigFloat`.
//!
//! A finite `BigFloat` is `0.m × 2^e` with the mantissa words `m` stored
//! little-endian and normalised so the top bit of the last word is set.

use astro_float::{BigFloat, Exponent, Sign as FloatSign, Word};
use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use bigmath_types::constants::ROUNDING;
use bigmath_types::error::{MathError, MathResult};

use crate::float::{checked, rounded};

const WORD_BITS: usize = Word::BITS as usize;

/// Largest decimal exponent accepted by [`parse_decimal`].
const MAX_DECIMAL_EXPONENT: i64 = 1_000_000;

/// Convert a big integer to a float rounded to `p` bits.
///
/// The magnitude is shifted so its top bit fills the top word, then handed
/// to the backend as mantissa words in one step: `|n| = 0.m × 2^bits`.
pub fn bigint_to_float(n: &BigInt, p: usize) -> MathResult<BigFloat> {
    if n.is_zero() {
        return Ok(BigFloat::new(p));
    }
    let bits = n.bits();
    let exponent = Exponent::try_from(bits)
        .map_err(|_| MathError::Backend(format!("integer of {bits} bits is out of range")))?;
    let pad = (WORD_BITS - (bits as usize) % WORD_BITS) % WORD_BITS;
    let m = n.magnitude() << pad;
    let per_digit = 64 / WORD_BITS;
    let words: Vec<Word> = m
        .iter_u64_digits()
        .flat_map(|d| (0..per_digit).map(move |i| (d >> (i * WORD_BITS)) as Word))
        .collect();
    // Splitting u64 digits into narrower words can leave a zero on top.
    let len = words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
    let sign = if n.is_negative() {
        FloatSign::Neg
    } else {
        FloatSign::Pos
    };
    let exact = checked(
        BigFloat::from_words(&words[..len], sign, exponent),
        "bigint_to_float",
    )?;
    rounded(&exact, p)
}

/// Mantissa of a finite non-zero `x` as an integer, with the power of two
/// that scales it back: `|x| = m × 2^shift`.
fn mantissa_and_shift(x: &BigFloat) -> Option<(BigUint, i64)> {
    let words = x.mantissa_digits()?;
    let e = i64::from(x.exponent()?);
    let halves = WORD_BITS / 32;
    let m = BigUint::new(
        words
            .iter()
            .flat_map(|&w| (0..halves).map(move |i| (u64::from(w) >> (i * 32)) as u32))
            .collect(),
    );
    Some((m, e - (words.len() * WORD_BITS) as i64))
}

fn sign_of(x: &BigFloat) -> Sign {
    if x.is_negative() {
        Sign::Minus
    } else {
        Sign::Plus
    }
}

/// Integer part of `x` (truncated toward zero), or `None` for NaN/Inf.
pub fn float_to_bigint(x: &BigFloat) -> Option<BigInt> {
    if x.is_nan() || x.is_inf() {
        return None;
    }
    let t = x.int();
    if t.is_zero() {
        return Some(BigInt::zero());
    }
    let (m, shift) = mantissa_and_shift(&t)?;
    let m = if shift >= 0 {
        m << shift as usize
    } else {
        m >> (-shift) as usize
    };
    Some(BigInt::from_biguint(sign_of(&t), m))
}

/// Exact rational value of a finite `x`.
pub fn float_to_rational(x: &BigFloat) -> Option<BigRational> {
    if x.is_nan() || x.is_inf() {
        return None;
    }
    if x.is_zero() {
        return Some(BigRational::zero());
    }
    let (m, shift) = mantissa_and_shift(x)?;
    let n = BigInt::from_biguint(sign_of(x), m);
    Some(if shift >= 0 {
        BigRational::from_integer(n << shift as usize)
    } else {
        BigRational::new(n, BigInt::one() << (-shift) as usize)
    })
}

pub fn rational_to_float(r: &BigRational, p: usize) -> MathResult<BigFloat> {
    let num = bigint_to_float(r.numer(), p)?;
    let den = bigint_to_float(r.denom(), p)?;
    Ok(num.div(&den, p, ROUNDING))
}

/// Read a decimal literal (`-12`, `1.5`, `.25`, `6.02e23`) exactly.
pub fn parse_decimal(text: &str) -> Option<BigRational> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (mantissa, exp) = match body.find(['e', 'E']) {
        Some(i) => (&body[..i], body[i + 1..].parse::<i64>().ok()?),
        None => (body, 0),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part)
    {
        return None;
    }
    let digits = format!("{int_part}{frac_part}");
    let mut num = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    if negative {
        num = -num;
    }
    let scale = exp.checked_sub(frac_part.len() as i64)?;
    if scale.abs() > MAX_DECIMAL_EXPONENT {
        return None;
    }
    let pow = BigInt::from(10).pow(scale.unsigned_abs() as u32);
    Some(if scale >= 0 {
        BigRational::from_integer(num * pow)
    } else {
        BigRational::new(num, pow)
    })
}

/// Parse a decimal literal straight to a float rounded to `p` bits.
pub fn decimal_to_float(text: &str, p: usize) -> MathResult<BigFloat> {
    let r = parse_decimal(text)
        .ok_or_else(|| MathError::Parse(format!("bad decimal literal {text:?}")))?;
    rational_to_float(&r, p)
}
