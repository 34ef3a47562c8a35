//! Small helpers over `BigFloat` shared by the engine.
//!
//! `BigFloat::cmp` yields `None` when either side is NaN; the predicates
//! below treat that as "not ordered" and return false.

use std::cmp::Ordering;

use astro_float::BigFloat;
use bigmath_types::constants::{GUARD_BITS, ROUNDING};
use bigmath_types::error::{MathError, MathResult};

pub fn compare(a: &BigFloat, b: &BigFloat) -> Option<Ordering> {
    a.cmp(b).map(|c| c.cmp(&0))
}

pub fn is_less(a: &BigFloat, b: &BigFloat) -> bool {
    compare(a, b) == Some(Ordering::Less)
}

pub fn is_greater(a: &BigFloat, b: &BigFloat) -> bool {
    compare(a, b) == Some(Ordering::Greater)
}

pub fn is_equal(a: &BigFloat, b: &BigFloat) -> bool {
    compare(a, b) == Some(Ordering::Equal)
}

pub fn negated(x: &BigFloat) -> BigFloat {
    let mut z = x.clone();
    z.inv_sign();
    z
}

/// Binary exponent `e` with `2^(e-1) <= |x| < 2^e`; zero maps to 0.
pub fn exponent_of(x: &BigFloat) -> i64 {
    if x.is_zero() {
        return 0;
    }
    x.exponent().map_or(0, i64::from)
}

/// Reject NaN results coming out of the backend.
pub fn checked(x: BigFloat, what: &str) -> MathResult<BigFloat> {
    if x.is_nan() {
        return Err(MathError::Backend(format!("{what}: {:?}", x.err())));
    }
    Ok(x)
}

/// Round `x` to `bits` of precision.
pub fn rounded(x: &BigFloat, bits: usize) -> MathResult<BigFloat> {
    let mut z = x.clone();
    z.set_precision(bits, ROUNDING)
        .map_err(|e| MathError::Backend(format!("set_precision({bits}): {e:?}")))?;
    Ok(z)
}

/// True when `a` and `b` agree to `bits` bits, relative to the larger
/// magnitude (absolute near zero).
pub fn agrees_within(a: &BigFloat, b: &BigFloat, bits: usize) -> bool {
    let p = bits + 2 * GUARD_BITS;
    let diff = a.sub(b, p, ROUNDING).abs();
    if diff.is_nan() {
        return false;
    }
    if diff.is_zero() {
        return true;
    }
    let scale = exponent_of(a).max(exponent_of(b));
    exponent_of(&diff) <= scale - bits as i64
}
