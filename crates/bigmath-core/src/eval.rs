// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Value Adapter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bridge between interpreter values and the float engine.
//!
//! A value is promoted to a float at the working precision, the function
//! runs, and the result is shrunk to an integer kind when it is one at the
//! target precision. Float results keep their guard bits.

use std::fmt;

use astro_float::BigFloat;
use tracing::debug;

use bigmath_math::convert::{bigint_to_float, float_to_bigint, rational_to_float};
use bigmath_math::float::{exponent_of, rounded};
use bigmath_math::loop_ctl::LoopStats;
use bigmath_math::{acos, asin, atan, sqrt, MathContext};
use bigmath_types::config::EngineConfig;
use bigmath_types::error::{MathError, MathResult};
use bigmath_types::precision::Precision;
use bigmath_types::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Sqrt,
    Asin,
    Acos,
    Atan,
}

impl UnaryFn {
    pub const ALL: [UnaryFn; 4] = [UnaryFn::Sqrt, UnaryFn::Asin, UnaryFn::Acos, UnaryFn::Atan];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Asin => "asin",
            UnaryFn::Acos => "acos",
            UnaryFn::Atan => "atan",
        }
    }

    pub fn apply(&self, x: &BigFloat, ctx: &mut MathContext) -> MathResult<BigFloat> {
        match self {
            UnaryFn::Sqrt => sqrt(x, ctx),
            UnaryFn::Asin => asin(x, ctx),
            UnaryFn::Acos => acos(x, ctx),
            UnaryFn::Atan => atan(x, ctx),
        }
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Float at the context's working precision holding `value`.
pub fn promote(value: &Value, ctx: &MathContext) -> MathResult<BigFloat> {
    let p = ctx.working_bits();
    match value {
        Value::Int(n) => Ok(BigFloat::from_i64(*n, p)),
        Value::BigInt(n) => bigint_to_float(n, p),
        Value::BigRat(r) => rational_to_float(r, p),
        Value::BigFloat(f) => rounded(f, p),
    }
}

/// Narrowest value kind for a result `x` held at working precision.
///
/// `x` becomes an integer only when, rounded to the target precision, it is
/// an integer whose bits all fit in that precision. Anything else stays the
/// guarded float, so printing rounds once from the full working value.
pub fn shrink(x: BigFloat, precision: &Precision) -> MathResult<Value> {
    if x.is_nan() || x.is_inf() {
        return Err(MathError::Backend(format!("non-finite result {x}")));
    }
    if x.is_zero() {
        return Ok(Value::Int(0));
    }
    let bits = precision.bits();
    let target = rounded(&x, bits)?;
    if target.is_int() && exponent_of(&target) <= bits as i64 {
        if let Some(n) = float_to_bigint(&target) {
            return Ok(Value::from(n));
        }
    }
    Ok(Value::BigFloat(x))
}

/// Promote, apply `f`, shrink.
pub fn eval_float_func(value: &Value, f: UnaryFn, ctx: &mut MathContext) -> MathResult<Value> {
    let x = promote(value, ctx)?;
    let z = f.apply(&x, ctx)?;
    shrink(z, &ctx.precision())
}

/// Owns the configuration and the math context of one interpreter session.
pub struct Evaluator {
    config: EngineConfig,
    ctx: MathContext,
    last_loops: Vec<LoopStats>,
}

impl Evaluator {
    pub fn new(config: EngineConfig) -> MathResult<Self> {
        config.validate()?;
        let ctx = MathContext::new(config.precision()?)?;
        Ok(Evaluator {
            config,
            ctx,
            last_loops: Vec::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Evaluate `f(value)` at the precision configured right now.
    pub fn eval(&mut self, f: UnaryFn, value: &Value) -> MathResult<Value> {
        self.ctx.set_precision(self.config.precision()?);
        self.ctx.take_stats();
        let result = eval_float_func(value, f, &mut self.ctx);
        self.last_loops = self.ctx.take_stats();
        debug!(
            function = f.name(),
            digits = self.config.float_prec,
            loops = self.last_loops.len(),
            ok = result.is_ok(),
            "evaluated"
        );
        result
    }

    /// Apply `fns` right to left, APL style: `[sqrt, atan]` is sqrt(atan(x)).
    pub fn eval_chain(&mut self, fns: &[UnaryFn], value: Value) -> MathResult<Value> {
        let mut loops = Vec::new();
        let mut v = value;
        for f in fns.iter().rev() {
            v = self.eval(*f, &v)?;
            loops.append(&mut self.last_loops);
        }
        self.last_loops = loops;
        Ok(v)
    }

    /// Loop statistics of the most recent evaluation.
    pub fn last_loops(&self) -> &[LoopStats] {
        &self.last_loops
    }
}
