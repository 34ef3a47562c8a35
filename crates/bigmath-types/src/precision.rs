// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Precision
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Decimal-digit precision and the binary precisions derived from it.

use crate::constants::{BITS_PER_DIGIT, GUARD_BITS, MAX_FLOAT_PREC};
use crate::error::{MathError, MathResult};

/// Requested precision of a computation, in significant decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    digits: u32,
}

impl Precision {
    pub fn from_digits(digits: u32) -> MathResult<Self> {
        if digits == 0 || digits > MAX_FLOAT_PREC {
            return Err(MathError::ConfigError(format!("illegal prec {digits}")));
        }
        Ok(Precision { digits })
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Target bits: enough to represent `digits` decimal digits.
    pub fn bits(&self) -> usize {
        (f64::from(self.digits) * BITS_PER_DIGIT).ceil() as usize
    }

    /// Bits every intermediate is computed at.
    pub fn working_bits(&self) -> usize {
        self.bits() + GUARD_BITS
    }
}
