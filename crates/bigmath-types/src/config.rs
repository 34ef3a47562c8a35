// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FLOAT_PREC, DEFAULT_MAX_DIGITS};
use crate::error::{MathError, MathResult};
use crate::precision::Precision;

/// Interpreter configuration consumed by the engine.
/// Every field is optional in JSON; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Float precision in decimal digits.
    #[serde(default = "default_float_prec")]
    pub float_prec: u32,
    /// Input base for integer literals (0 means 10).
    #[serde(default)]
    pub ibase: u32,
    /// Output base for integers (0 means 10). Floats always print in decimal.
    #[serde(default)]
    pub obase: u32,
    /// Integers with more decimal digits than this print as floats (0 disables).
    #[serde(default = "default_max_digits")]
    pub max_digits: u32,
    #[serde(default)]
    pub debug: DebugFlags,
}

/// Debug switches toggled with `)debug`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugFlags {
    /// Report per-loop iteration counts after each evaluation.
    #[serde(default, rename = "loop")]
    pub loops: bool,
    /// Treat recoverable errors as fatal.
    #[serde(default)]
    pub panic: bool,
}

/// Names accepted by `)debug`, in display order.
pub const DEBUG_FLAG_NAMES: [&str; 2] = ["loop", "panic"];

fn default_float_prec() -> u32 {
    DEFAULT_FLOAT_PREC
}
fn default_max_digits() -> u32 {
    DEFAULT_MAX_DIGITS
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            float_prec: default_float_prec(),
            ibase: 0,
            obase: 0,
            max_digits: default_max_digits(),
            debug: DebugFlags::default(),
        }
    }
}

impl DebugFlags {
    pub fn get(&self, name: &str) -> Option<bool> {
        match name {
            "loop" => Some(self.loops),
            "panic" => Some(self.panic),
            _ => None,
        }
    }

    /// Returns false if no flag has that name.
    pub fn set(&mut self, name: &str, on: bool) -> bool {
        match name {
            "loop" => self.loops = on,
            "panic" => self.panic = on,
            _ => return false,
        }
        true
    }
}

fn check_base(base: u32) -> MathResult<()> {
    if base != 0 && !(2..=36).contains(&base) {
        return Err(MathError::ConfigError(format!("illegal base {base}")));
    }
    Ok(())
}

impl EngineConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> MathResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MathResult<()> {
        Precision::from_digits(self.float_prec)?;
        check_base(self.ibase)?;
        check_base(self.obase)?;
        Ok(())
    }

    /// The working precision, read fresh on every evaluation.
    pub fn precision(&self) -> MathResult<Precision> {
        Precision::from_digits(self.float_prec)
    }

    pub fn set_float_prec(&mut self, digits: u32) -> MathResult<()> {
        Precision::from_digits(digits)?;
        self.float_prec = digits;
        Ok(())
    }

    /// Effective bases, with 0 resolved to 10.
    pub fn base(&self) -> (u32, u32) {
        let resolve = |b: u32| if b == 0 { 10 } else { b };
        (resolve(self.ibase), resolve(self.obase))
    }

    pub fn set_base(&mut self, ibase: u32, obase: u32) -> MathResult<()> {
        check_base(ibase)?;
        check_base(obase)?;
        self.ibase = ibase;
        self.obase = obase;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.float_prec, 77);
        assert_eq!(cfg.base(), (10, 10));
        assert_eq!(cfg.max_digits, 10_000);
        assert!(!cfg.debug.loops);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let cfg: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"float_prec": 24, "obase": 16, "debug": {{"loop": true}}}}"#
        )
        .unwrap();
        let cfg = EngineConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.float_prec, 24);
        assert_eq!(cfg.base(), (10, 16));
        assert!(cfg.debug.loops);
        assert!(!cfg.debug.panic);
    }

    #[test]
    fn test_load_rejects_bad_base() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"ibase": 1}}"#).unwrap();
        let err = EngineConfig::from_file(file.path().to_str().unwrap()).unwrap_err();
        match err {
            MathError::ConfigError(msg) => assert!(msg.contains("illegal base 1")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EngineConfig::from_file("/nonexistent/bigmath.json").unwrap_err();
        assert!(matches!(err, MathError::Io(_)));
    }

    #[test]
    fn test_set_float_prec_validates() {
        let mut cfg = EngineConfig::default();
        assert!(cfg.set_float_prec(0).is_err());
        assert_eq!(cfg.float_prec, 77);
        cfg.set_float_prec(24).unwrap();
        assert_eq!(cfg.precision().unwrap().digits(), 24);
    }

    #[test]
    fn test_debug_flags_by_name() {
        let mut flags = DebugFlags::default();
        assert!(flags.set("loop", true));
        assert_eq!(flags.get("loop"), Some(true));
        assert!(!flags.set("tokens", true));
        assert_eq!(flags.get("tokens"), None);
    }
}
