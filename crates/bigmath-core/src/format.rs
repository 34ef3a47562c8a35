// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Formatter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Text rendering of values.
//!
//! Floats are rendered from their exact binary value, rounded half-up to
//! `float_prec` significant decimal digits. Floats are always decimal;
//! `obase` only applies to integers and rationals.

use astro_float::BigFloat;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use bigmath_math::convert::float_to_rational;
use bigmath_types::config::EngineConfig;
use bigmath_types::error::{MathError, MathResult};
use bigmath_types::value::Value;

/// Smallest decimal exponent still printed positionally.
const MIN_POSITIONAL_EXP: i64 = -5;

fn pow10(n: u64) -> BigInt {
    num_traits::pow(BigInt::from(10), n as usize)
}

fn decimal_len(n: &BigInt) -> i64 {
    n.magnitude().to_str_radix(10).len() as i64
}

/// `num / den ≥ 10^k` for positive `num` and `den`.
fn at_least_pow10(num: &BigInt, den: &BigInt, k: i64) -> bool {
    if k >= 0 {
        *num >= den * pow10(k as u64)
    } else {
        num * pow10(k.unsigned_abs()) >= *den
    }
}

/// Significant digits of a positive rational, rounded half-up to `digits`,
/// and the decimal exponent of the first digit.
fn significant_digits(r: &BigRational, digits: u32) -> (String, i64) {
    let (num, den) = (r.numer(), r.denom());
    let guess = decimal_len(num) - decimal_len(den);
    let mut k = if at_least_pow10(num, den, guess) {
        guess
    } else {
        guess - 1
    };
    let scale = i64::from(digits) - 1 - k;
    let (n, d) = if scale >= 0 {
        (num * pow10(scale as u64), den.clone())
    } else {
        (num.clone(), den * pow10(scale.unsigned_abs()))
    };
    let two = BigInt::from(2);
    let mut q = (n * &two + &d).div_floor(&(d * two));
    if decimal_len(&q) > i64::from(digits) {
        q /= 10;
        k += 1;
    }
    (q.to_str_radix(10), k)
}

/// Render an exact rational in decimal float notation.
pub fn format_decimal(r: &BigRational, digits: u32) -> String {
    if r.is_zero() {
        return "0".to_string();
    }
    let (s, k) = significant_digits(&r.abs(), digits.max(1));
    let s = s.trim_end_matches('0');
    let sign = if r.is_negative() { "-" } else { "" };
    let body = if (MIN_POSITIONAL_EXP..i64::from(digits)).contains(&k) {
        if k < 0 {
            format!("0.{}{s}", "0".repeat((-k - 1) as usize))
        } else {
            let int_len = k as usize + 1;
            if s.len() <= int_len {
                format!("{s}{}", "0".repeat(int_len - s.len()))
            } else {
                format!("{}.{}", &s[..int_len], &s[int_len..])
            }
        }
    } else {
        let mantissa = if s.len() > 1 {
            format!("{}.{}", &s[..1], &s[1..])
        } else {
            s.to_string()
        };
        let exp_sign = if k < 0 { '-' } else { '+' };
        format!("{mantissa}e{exp_sign}{}", k.unsigned_abs())
    };
    format!("{sign}{body}")
}

pub fn format_float(x: &BigFloat, digits: u32) -> MathResult<String> {
    let r = float_to_rational(x)
        .ok_or_else(|| MathError::Backend(format!("cannot format non-finite {x}")))?;
    Ok(format_decimal(&r, digits))
}

fn format_integer(n: &BigInt, config: &EngineConfig) -> String {
    let max = i64::from(config.max_digits);
    if max > 0 && decimal_len(n) > max {
        return format_decimal(&BigRational::from_integer(n.clone()), config.float_prec);
    }
    let (_, obase) = config.base();
    n.to_str_radix(obase)
}

/// Render `value` under the output settings in `config`.
pub fn format_value(value: &Value, config: &EngineConfig) -> MathResult<String> {
    let (_, obase) = config.base();
    match value {
        Value::Int(n) => Ok(format_integer(&BigInt::from(*n), config)),
        Value::BigInt(n) => Ok(format_integer(n, config)),
        Value::BigRat(r) => Ok(format!(
            "{}/{}",
            r.numer().to_str_radix(obase),
            r.denom().to_str_radix(obase)
        )),
        Value::BigFloat(f) => format_float(f, config.float_prec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn config(digits: u32) -> EngineConfig {
        let mut cfg = EngineConfig::default();
        cfg.set_float_prec(digits).unwrap();
        cfg
    }

    #[test]
    fn test_integers_in_output_base() {
        let mut cfg = config(10);
        assert_eq!(format_value(&Value::Int(-255), &cfg).unwrap(), "-255");
        cfg.set_base(10, 16).unwrap();
        assert_eq!(format_value(&Value::Int(255), &cfg).unwrap(), "ff");
        cfg.set_base(10, 0).unwrap();
        assert_eq!(format_value(&Value::Int(255), &cfg).unwrap(), "255");
    }

    #[test]
    fn test_long_integer_prints_as_float() {
        let mut cfg = config(5);
        cfg.max_digits = 4;
        assert_eq!(format_value(&Value::Int(123_456), &cfg).unwrap(), "1.2346e+5");
        assert_eq!(format_value(&Value::Int(1234), &cfg).unwrap(), "1234");
        cfg.max_digits = 0;
        assert_eq!(format_value(&Value::Int(123_456), &cfg).unwrap(), "123456");
    }

    #[test]
    fn test_rational_as_fraction() {
        let cfg = config(10);
        let v = Value::from(rat(-3, 4));
        assert_eq!(format_value(&v, &cfg).unwrap(), "-3/4");
    }

    #[test]
    fn test_positional_range() {
        assert_eq!(format_decimal(&rat(5, 2), 10), "2.5");
        assert_eq!(format_decimal(&rat(1, 1000), 10), "0.001");
        assert_eq!(format_decimal(&rat(-1, 100_000), 10), "-0.00001");
        assert_eq!(format_decimal(&rat(12_300, 1), 10), "12300");
        assert_eq!(format_decimal(&rat(1, 3), 6), "0.333333");
    }

    #[test]
    fn test_scientific_outside_range() {
        assert_eq!(format_decimal(&rat(1, 1_000_000), 10), "1e-6");
        assert_eq!(format_decimal(&rat(-25, 10_000_000), 10), "-2.5e-6");
        assert_eq!(format_decimal(&rat(123_456, 1), 3), "1.23e+5");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(format_decimal(&rat(9_999_999, 1_000_000), 3), "10");
        assert_eq!(format_decimal(&rat(99_999, 1), 3), "1e+5");
        assert_eq!(format_decimal(&rat(2, 3), 4), "0.6667");
    }

    #[test]
    fn test_float_values() {
        let cfg = config(10);
        let v = Value::BigFloat(BigFloat::from_f64(0.1, 64));
        assert_eq!(format_value(&v, &cfg).unwrap(), "0.1");
        let v = Value::BigFloat(BigFloat::from_f64(-1.5e300, 64));
        assert_eq!(format_value(&v, &cfg).unwrap(), "-1.5e+300");
        let v = Value::BigFloat(BigFloat::from_f64(0.0, 64));
        assert_eq!(format_value(&v, &cfg).unwrap(), "0");
    }
}
