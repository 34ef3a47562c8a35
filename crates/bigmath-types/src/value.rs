// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Values
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tagged numeric value flowing through the interpreter.
//!
//! Values are immutable once built. Constructors from integer and rational
//! kinds already shrink to the narrowest exact kind; floats are shrunk by
//! the evaluator, which knows how to inspect their mantissa.

use astro_float::BigFloat;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive};

#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    BigInt(BigInt),
    BigRat(BigRational),
    BigFloat(BigFloat),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::BigInt(_) => "big int",
            Value::BigRat(_) => "rational",
            Value::BigFloat(_) => "float",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Int(_) | Value::BigInt(_))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        match n.to_i64() {
            Some(small) => Value::Int(small),
            None => Value::BigInt(n),
        }
    }
}

impl From<BigRational> for Value {
    fn from(r: BigRational) -> Self {
        if r.denom().is_one() {
            Value::from(r.numer().clone())
        } else {
            Value::BigRat(r)
        }
    }
}
