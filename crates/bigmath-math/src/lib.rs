//! Arbitrary-precision transcendental functions for SCPN BigMath.

pub mod asin;
pub mod atan;
pub mod consts;
pub mod context;
pub mod convert;
pub mod float;
pub mod loop_ctl;
pub mod sqrt;

pub use asin::{acos, asin};
pub use atan::atan;
pub use context::MathContext;
pub use sqrt::sqrt;
