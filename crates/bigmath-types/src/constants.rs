// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use astro_float::RoundingMode;

/// log2(10): bits needed per decimal digit.
pub const BITS_PER_DIGIT: f64 = std::f64::consts::LOG2_10;

/// Bits carried beyond the target precision in every engine computation.
/// Keeps the convergence threshold well above accumulated rounding noise.
pub const GUARD_BITS: usize = 64;

/// Bits added to the convergence resolution per loop guard digit.
pub const BITS_PER_GUARD_DIGIT: usize = 4;

/// Default float precision in decimal digits (≈ 256 bits).
pub const DEFAULT_FLOAT_PREC: u32 = 77;

/// Upper bound accepted by `)prec`.
pub const MAX_FLOAT_PREC: u32 = 1_000_000;

/// Integers longer than this are printed in float form (0 disables).
pub const DEFAULT_MAX_DIGITS: u32 = 10_000;

/// Rounding used by every engine operation.
pub const ROUNDING: RoundingMode = RoundingMode::ToEven;

/// Fixed iteration allowance of a convergence loop.
pub const LOOP_BASE_ITERATIONS: usize = 10;

/// Additional iterations allowed per bit of loop resolution.
pub const LOOP_ITERATIONS_PER_BIT: usize = 2;

/// |1 - x| below which atan switches to the π/8 Euler identity.
pub const ATAN_CROSSOVER: f64 = 0.5;

/// Precisions whose constants a context keeps before evicting the oldest.
pub const CONST_CACHE_CAPACITY: usize = 4;
