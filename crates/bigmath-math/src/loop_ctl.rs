// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Convergence Loop Controller
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared termination policy for every iterative algorithm in the engine.
//!
//! A loop compares each new iterate with the previous one. It stops when
//! the change falls below the resolution of the target precision inflated
//! by the guard digits:
//!
//!   |z_k - z_{k-1}| < 2^(e(z_k) - resolution_bits)
//!   resolution_bits = target_bits + 4 * guard_digits
//!
//! where `e(z)` is the binary exponent of the iterate (of the reference
//! input when the iterate is zero). The comparison uses the magnitude of
//! the change, so alternating series are handled like monotone ones.
//! The first iterate is never accepted.
//!
//! The iteration cap is `10 + 2 * resolution_bits`. Every series in the
//! engine gains at least half a bit per term, so hitting the cap means a
//! defect and is reported as [`MathError::NonConvergence`].

use astro_float::BigFloat;
use tracing::{debug, error, trace};

use bigmath_types::constants::{
    BITS_PER_GUARD_DIGIT, LOOP_BASE_ITERATIONS, LOOP_ITERATIONS_PER_BIT, ROUNDING,
};
use bigmath_types::error::{MathError, MathResult};
use bigmath_types::precision::Precision;

use crate::float::{checked, exponent_of};

/// Iteration count of a finished loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopStats {
    pub function: &'static str,
    pub iterations: usize,
}

#[derive(Debug)]
pub struct ConvergenceLoop {
    name: &'static str,
    reference: BigFloat,
    working_bits: usize,
    resolution_bits: usize,
    max_iterations: usize,
    iterations: usize,
    prev: Option<BigFloat>,
}

impl ConvergenceLoop {
    /// Controller for one invocation of `name` on input `reference`.
    ///
    /// `guard_digits` must be positive.
    pub fn new(
        name: &'static str,
        reference: &BigFloat,
        guard_digits: u32,
        precision: &Precision,
    ) -> Self {
        debug_assert!(guard_digits > 0, "{name}: guard digits must be positive");
        let guard = guard_digits.max(1) as usize;
        let resolution_bits = precision.bits() + BITS_PER_GUARD_DIGIT * guard;
        ConvergenceLoop {
            name,
            reference: reference.clone(),
            working_bits: precision.working_bits(),
            resolution_bits,
            max_iterations: LOOP_BASE_ITERATIONS + LOOP_ITERATIONS_PER_BIT * resolution_bits,
            iterations: 0,
            prev: None,
        }
    }

    /// Override the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(2);
        self
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn resolution_bits(&self) -> usize {
        self.resolution_bits
    }

    pub fn stats(&self) -> LoopStats {
        LoopStats {
            function: self.name,
            iterations: self.iterations,
        }
    }

    /// Feed the latest iterate; `Ok(true)` means stop and use `z`.
    pub fn terminate(&mut self, z: &BigFloat) -> MathResult<bool> {
        self.iterations += 1;
        let converged = match &self.prev {
            None => false,
            Some(prev) => {
                let delta = checked(z.sub(prev, self.working_bits, ROUNDING), self.name)?.abs();
                delta.is_zero() || self.below_resolution(z, &delta)
            }
        };
        trace!(
            function = self.name,
            iteration = self.iterations,
            converged,
            "loop step"
        );
        if converged {
            debug!(
                function = self.name,
                iterations = self.iterations,
                "converged"
            );
            return Ok(true);
        }
        if self.iterations >= self.max_iterations {
            let input = self.reference.to_string();
            error!(
                function = self.name,
                input = %input,
                iterations = self.iterations,
                "no convergence"
            );
            return Err(MathError::NonConvergence {
                function: self.name,
                input,
                iterations: self.iterations,
            });
        }
        self.prev = Some(z.clone());
        Ok(false)
    }

    fn below_resolution(&self, z: &BigFloat, delta: &BigFloat) -> bool {
        let scale = if z.is_zero() {
            exponent_of(&self.reference)
        } else {
            exponent_of(z)
        };
        exponent_of(delta) <= scale - self.resolution_bits as i64
    }
}
