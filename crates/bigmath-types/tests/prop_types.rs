// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Property-Based Tests (proptest) for bigmath-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for bigmath-types using proptest.
//!
//! Covers: precision derivation, configuration validation and
//! serialization roundtrip, value shrinking.

use bigmath_types::config::EngineConfig;
use bigmath_types::constants::{BITS_PER_DIGIT, GUARD_BITS};
use bigmath_types::precision::Precision;
use bigmath_types::value::Value;
use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

// ── Precision ────────────────────────────────────────────────────────

proptest! {
    /// Target bits always hold the requested decimal digits.
    #[test]
    fn bits_cover_digits(digits in 1u32..5000) {
        let p = Precision::from_digits(digits).unwrap();
        let needed = f64::from(digits) * BITS_PER_DIGIT;
        prop_assert!(p.bits() as f64 >= needed);
        prop_assert!((p.bits() as f64) < needed + 1.0);
    }

    /// More digits never means fewer bits.
    #[test]
    fn bits_monotonic(a in 1u32..5000, b in 1u32..5000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = Precision::from_digits(lo).unwrap();
        let p_hi = Precision::from_digits(hi).unwrap();
        prop_assert!(p_lo.bits() <= p_hi.bits());
        prop_assert_eq!(p_hi.working_bits() - p_hi.bits(), GUARD_BITS);
    }
}

// ── Configuration ────────────────────────────────────────────────────

proptest! {
    /// Bases outside {0} ∪ [2, 36] are rejected and leave the config untouched.
    #[test]
    fn set_base_validates(base in 0u32..100) {
        let mut cfg = EngineConfig::default();
        let legal = base == 0 || (2..=36).contains(&base);
        prop_assert_eq!(cfg.set_base(base, base).is_ok(), legal);
        if !legal {
            prop_assert_eq!(cfg.base(), (10, 10));
        }
    }

    /// JSON roundtrip preserves every field.
    #[test]
    fn config_json_roundtrip(
        prec in 1u32..10_000,
        ibase in 2u32..=36,
        obase in 2u32..=36,
        max_digits in 0u32..100_000,
        loops in any::<bool>(),
    ) {
        let mut cfg = EngineConfig::default();
        cfg.set_float_prec(prec).unwrap();
        cfg.set_base(ibase, obase).unwrap();
        cfg.max_digits = max_digits;
        cfg.debug.loops = loops;
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, cfg);
    }
}

// ── Values ───────────────────────────────────────────────────────────

proptest! {
    /// Any i64 stored as a big integer shrinks back to Int.
    #[test]
    fn big_int_in_range_shrinks(n in any::<i64>()) {
        let v = Value::from(BigInt::from(n));
        prop_assert!(matches!(v, Value::Int(m) if m == n));
    }

    /// k*d/d is an integer for any non-zero d.
    #[test]
    fn whole_rational_is_integer(k in -1_000_000i64..1_000_000, d in 1i64..1000) {
        let r = BigRational::new(BigInt::from(k * d), BigInt::from(d));
        let v = Value::from(r);
        prop_assert!(v.is_integer());
    }
}
