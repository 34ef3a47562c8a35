// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Precision-Keyed Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Constants at a given working precision, computed on demand.
//!
//! Entries are keyed by working bits. A constant computed for one precision
//! is never handed to a computation at another. At most
//! `CONST_CACHE_CAPACITY` precisions are held; the oldest goes first.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use astro_float::{BigFloat, Consts};
use tracing::debug;

use bigmath_types::constants::{CONST_CACHE_CAPACITY, ROUNDING};
use bigmath_types::error::{MathError, MathResult};
use bigmath_types::precision::Precision;

use crate::float::checked;
use crate::sqrt::newton_sqrt;

#[derive(Debug, Clone)]
pub struct Constants {
    /// Working bits every value below is rounded to.
    pub bits: usize,
    pub one: BigFloat,
    pub two: BigFloat,
    pub half: BigFloat,
    pub pi: BigFloat,
    pub half_pi: BigFloat,
    pub eighth_pi: BigFloat,
    pub sqrt2: BigFloat,
    /// tan(π/8) = √2 - 1.
    pub tan_eighth_pi: BigFloat,
}

impl Constants {
    fn compute(precision: &Precision, cc: &mut Consts) -> MathResult<Self> {
        let p = precision.working_bits();
        debug!(digits = precision.digits(), bits = p, "computing constants");
        let one = BigFloat::from_u64(1, p);
        let two = BigFloat::from_u64(2, p);
        let half = one.div(&two, p, ROUNDING);
        let pi = checked(cc.pi(p, ROUNDING), "pi")?;
        let half_pi = pi.div(&two, p, ROUNDING);
        let eighth_pi = pi.div(&BigFloat::from_u64(8, p), p, ROUNDING);
        let sqrt2 = newton_sqrt(&two, precision)?;
        let tan_eighth_pi = sqrt2.sub(&one, p, ROUNDING);
        Ok(Constants {
            bits: p,
            one,
            two,
            half,
            pi,
            half_pi,
            eighth_pi,
            sqrt2,
            tan_eighth_pi,
        })
    }
}

/// Constants cache owned by one evaluation context.
pub struct ConstCache {
    backend: Consts,
    by_bits: HashMap<usize, Arc<Constants>>,
    // Insertion order of the keys in `by_bits`.
    order: VecDeque<usize>,
}

impl ConstCache {
    pub fn new() -> MathResult<Self> {
        let backend =
            Consts::new().map_err(|e| MathError::Backend(format!("constants cache: {e:?}")))?;
        Ok(ConstCache {
            backend,
            by_bits: HashMap::new(),
            order: VecDeque::new(),
        })
    }

    pub fn get(&mut self, precision: &Precision) -> MathResult<Arc<Constants>> {
        let bits = precision.working_bits();
        if let Some(c) = self.by_bits.get(&bits) {
            return Ok(Arc::clone(c));
        }
        let c = Arc::new(Constants::compute(precision, &mut self.backend)?);
        if self.order.len() >= CONST_CACHE_CAPACITY {
            if let Some(oldest) = self.order.pop_front() {
                self.by_bits.remove(&oldest);
                debug!(bits = oldest, "evicted constants");
            }
        }
        self.by_bits.insert(bits, Arc::clone(&c));
        self.order.push_back(bits);
        Ok(c)
    }

    /// Number of precisions with cached constants.
    pub fn len(&self) -> usize {
        self.by_bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_bits.is_empty()
    }
}
