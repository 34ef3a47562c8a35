// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Arctangent
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Arctangent over the whole real line.
//!
//! Two Taylor series cover the line:
//!   |x| < 1:  atan(x) = x - x³/3 + x⁵/5 - ...
//!    x  > 1:  atan(x) = π/2 - 1/x + 1/3x³ - 1/5x⁵ + ...
//! Both crawl near x = 1 (atan 1.00001 takes over a million terms at 256
//! bits). There the Euler identity
//!   atan(x) = atan(y) + atan((x - y) / (1 + xy))
//! with y = tan(π/8) = √2 - 1 moves the argument into fast territory:
//!   atan(x) = π/8 + atan((x - y) / (1 + xy)).
//!
//! The identity applies when |1 - x| < 0.5 and maps (0.5, 1.5) onto
//! (0.07, 0.66). Arguments that land in (0.5, 0.66) take the identity once
//! more and end below 0.2, so recursion is at most three deep (sign, two
//! identity steps). Iterations at 256 bits, by x:
//!   0.1 ≈ 40, 0.5 ≈ 130, 1.0 ≈ 100, 1.5 ≈ 225 (worst), 2.0 ≈ 130.

use astro_float::BigFloat;

use bigmath_types::constants::{ATAN_CROSSOVER, ROUNDING};
use bigmath_types::error::MathResult;

use crate::consts::Constants;
use crate::context::MathContext;
use crate::float::{is_greater, is_less, negated};

/// atan(x) in radians at the context's working precision.
pub fn atan(x: &BigFloat, ctx: &mut MathContext) -> MathResult<BigFloat> {
    // atan(-x) = -atan(x); keeps the crossover test one-sided.
    if x.is_negative() {
        let mut z = atan(&negated(x), ctx)?;
        z.inv_sign();
        return Ok(z);
    }

    let p = ctx.working_bits();
    let c = ctx.constants()?;

    let distance = c.one.sub(x, p, ROUNDING).abs();
    if is_less(&distance, &BigFloat::from_f64(ATAN_CROSSOVER, p)) {
        let y = &c.tan_eighth_pi;
        let num = x.sub(y, p, ROUNDING);
        let den = x.mul(y, p, ROUNDING).add(&c.one, p, ROUNDING);
        let z = atan(&num.div(&den, p, ROUNDING), ctx)?;
        return Ok(c.eighth_pi.add(&z, p, ROUNDING));
    }

    if is_greater(x, &c.one) {
        return atan_large(x, &c, ctx);
    }
    atan_small(x, &c, ctx)
}

/// Series for 0 <= x < 1.
fn atan_small(x: &BigFloat, c: &Constants, ctx: &mut MathContext) -> MathResult<BigFloat> {
    let p = ctx.working_bits();
    let x_squared = x.mul(x, p, ROUNDING);
    let mut x_n = x.clone();
    let mut n = c.one.clone();
    let mut z = BigFloat::new(p);
    let mut plus = true;

    let mut lp = ctx.new_loop("atan", x, 4);
    // n goes up by two each step.
    loop {
        let term = x_n.div(&n, p, ROUNDING);
        z = if plus {
            z.add(&term, p, ROUNDING)
        } else {
            z.sub(&term, p, ROUNDING)
        };
        plus = !plus;

        if lp.terminate(&z)? {
            break;
        }
        n = n.add(&c.two, p, ROUNDING);
        // x_n becomes x^n for the new n.
        x_n = x_n.mul(&x_squared, p, ROUNDING);
    }
    ctx.finish_loop(&lp);
    Ok(z)
}

/// Series for x > 1.
fn atan_large(x: &BigFloat, c: &Constants, ctx: &mut MathContext) -> MathResult<BigFloat> {
    let p = ctx.working_bits();
    let x_squared = x.mul(x, p, ROUNDING);
    let mut x_n = x.clone();
    let mut n = c.one.clone();
    let mut z = c.half_pi.clone();
    let mut plus = false;

    let mut lp = ctx.new_loop("atan", x, 4);
    loop {
        let term = c.one.div(&x_n.mul(&n, p, ROUNDING), p, ROUNDING);
        z = if plus {
            z.add(&term, p, ROUNDING)
        } else {
            z.sub(&term, p, ROUNDING)
        };
        plus = !plus;

        if lp.terminate(&z)? {
            break;
        }
        n = n.add(&c.two, p, ROUNDING);
        x_n = x_n.mul(&x_squared, p, ROUNDING);
    }
    ctx.finish_loop(&lp);
    Ok(z)
}
