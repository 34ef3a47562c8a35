//! Per-evaluation state: precision, constants cache, loop statistics.

use std::sync::Arc;

use astro_float::BigFloat;

use bigmath_types::error::MathResult;
use bigmath_types::precision::Precision;

use crate::consts::{ConstCache, Constants};
use crate::loop_ctl::{ConvergenceLoop, LoopStats};

/// Owned by exactly one evaluator; nothing in it is shared between
/// contexts, so evaluations at different precisions cannot interfere.
pub struct MathContext {
    precision: Precision,
    cache: ConstCache,
    stats: Vec<LoopStats>,
}

impl MathContext {
    pub fn new(precision: Precision) -> MathResult<Self> {
        Ok(MathContext {
            precision,
            cache: ConstCache::new()?,
            stats: Vec::new(),
        })
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
    }

    pub fn working_bits(&self) -> usize {
        self.precision.working_bits()
    }

    /// Constants at the current precision.
    pub fn constants(&mut self) -> MathResult<Arc<Constants>> {
        self.cache.get(&self.precision)
    }

    /// Number of precisions with cached constants.
    pub fn cached_precisions(&self) -> usize {
        self.cache.len()
    }

    pub fn new_loop(
        &self,
        name: &'static str,
        reference: &BigFloat,
        guard_digits: u32,
    ) -> ConvergenceLoop {
        ConvergenceLoop::new(name, reference, guard_digits, &self.precision)
    }

    /// Record the statistics of a finished loop.
    pub fn finish_loop(&mut self, lp: &ConvergenceLoop) {
        self.stats.push(lp.stats());
    }

    /// Drain the statistics recorded since the last call.
    pub fn take_stats(&mut self) -> Vec<LoopStats> {
        std::mem::take(&mut self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_follow_precision() {
        let mut ctx = MathContext::new(Precision::from_digits(20).unwrap()).unwrap();
        let a = ctx.constants().unwrap();
        ctx.set_precision(Precision::from_digits(40).unwrap());
        let b = ctx.constants().unwrap();
        assert_ne!(a.bits, b.bits);
        assert_eq!(b.bits, ctx.working_bits());
        assert_eq!(ctx.cached_precisions(), 2);
    }

    #[test]
    fn test_take_stats_drains() {
        let mut ctx = MathContext::new(Precision::from_digits(20).unwrap()).unwrap();
        let x = BigFloat::from_u64(1, ctx.working_bits());
        let mut lp = ctx.new_loop("probe", &x, 1);
        lp.terminate(&x).unwrap();
        ctx.finish_loop(&lp);
        assert_eq!(ctx.take_stats().len(), 1);
        assert!(ctx.take_stats().is_empty());
    }
}
