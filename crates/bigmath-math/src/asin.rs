// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Arcsine / Arccosine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! asin and acos through arctangent.
//!
//! The asin Taylor series crawls near ±1, but atan converges well
//! everywhere, so
//!   asin(x) = atan(x / √(1 - x²)),   |x| < 1
//!   acos(x) = π/2 - asin(x)
//! At |x| = 1 the quotient is degenerate and ±π/2 is returned directly.

use std::cmp::Ordering;

use astro_float::BigFloat;

use bigmath_types::constants::ROUNDING;
use bigmath_types::error::{MathError, MathResult};

use crate::atan::atan;
use crate::context::MathContext;
use crate::float::{compare, negated};
use crate::sqrt::sqrt;

pub fn asin(x: &BigFloat, ctx: &mut MathContext) -> MathResult<BigFloat> {
    asin_checked("asin", x, ctx)
}

pub fn acos(x: &BigFloat, ctx: &mut MathContext) -> MathResult<BigFloat> {
    let a = asin_checked("acos", x, ctx)?;
    let p = ctx.working_bits();
    let c = ctx.constants()?;
    Ok(c.half_pi.sub(&a, p, ROUNDING))
}

/// asin with domain errors reported under `name`.
fn asin_checked(name: &'static str, x: &BigFloat, ctx: &mut MathContext) -> MathResult<BigFloat> {
    let p = ctx.working_bits();
    let c = ctx.constants()?;

    let signed_half_pi = || {
        if x.is_negative() {
            negated(&c.half_pi)
        } else {
            c.half_pi.clone()
        }
    };

    match compare(&x.abs(), &c.one) {
        Some(Ordering::Less) => {}
        Some(Ordering::Equal) => return Ok(signed_half_pi()),
        _ => {
            return Err(MathError::OutOfDomain {
                function: name,
                value: x.to_string(),
            })
        }
    }

    let one_minus_sq = c.one.sub(&x.mul(x, p, ROUNDING), p, ROUNDING);
    let root = sqrt(&one_minus_sq, ctx)?;
    // x² rounded to exactly 1: x is within an ulp of ±1.
    if root.is_zero() {
        return Ok(signed_half_pi());
    }
    atan(&x.div(&root, p, ROUNDING), ctx)
}
