// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Square Root
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Square root by Newton's method on f(z) = z² - x:
//!
//!   z ← z - (z² - x) / 2z
//!
//! Seeding with x's exponent halved puts the first iterate within a factor
//! of two of the root, so only a handful of iterations are needed.

use astro_float::BigFloat;

use bigmath_types::constants::ROUNDING;
use bigmath_types::error::{MathError, MathResult};
use bigmath_types::precision::Precision;

use crate::context::MathContext;
use crate::loop_ctl::ConvergenceLoop;

/// Non-negative square root of `x` at the context's working precision.
pub fn sqrt(x: &BigFloat, ctx: &mut MathContext) -> MathResult<BigFloat> {
    let (z, stats) = newton(x, &ctx.precision())?;
    if let Some(lp) = stats {
        ctx.finish_loop(&lp);
    }
    Ok(z)
}

/// Context-free core, also used to build √2 for the constants cache.
pub fn newton_sqrt(x: &BigFloat, precision: &Precision) -> MathResult<BigFloat> {
    newton(x, precision).map(|(z, _)| z)
}

fn newton(
    x: &BigFloat,
    precision: &Precision,
) -> MathResult<(BigFloat, Option<ConvergenceLoop>)> {
    let p = precision.working_bits();
    if x.is_negative() {
        return Err(MathError::NegativeSqrt);
    }
    if x.is_zero() {
        return Ok((BigFloat::new(p), None));
    }

    let two = BigFloat::from_u64(2, p);
    let mut z = x.clone();
    if let Some(e) = x.exponent() {
        z.set_exponent(e / 2);
    }

    let mut lp = ConvergenceLoop::new("sqrt", x, 1, precision);
    loop {
        let num = z.mul(&z, p, ROUNDING).sub(x, p, ROUNDING);
        let den = two.mul(&z, p, ROUNDING);
        z = z.sub(&num.div(&den, p, ROUNDING), p, ROUNDING);
        if lp.terminate(&z)? {
            break;
        }
    }
    Ok((z, Some(lp)))
}
