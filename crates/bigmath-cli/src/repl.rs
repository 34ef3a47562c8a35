// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Session
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One interpreter session: a line is either a `)command` or a chain of
//! function names followed by a number, e.g. `sqrt atan 2`.

use std::io::Write;

use anyhow::Result;
use tracing::warn;

use bigmath_core::format::format_value;
use bigmath_core::parse::parse_number;
use bigmath_core::{Evaluator, UnaryFn};
use bigmath_types::config::EngineConfig;
use bigmath_types::error::{MathError, MathResult};
use bigmath_types::value::Value;

use crate::special;

pub struct Session {
    eval: Evaluator,
}

impl Session {
    pub fn new(config: EngineConfig) -> MathResult<Self> {
        Ok(Session {
            eval: Evaluator::new(config)?,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        self.eval.config()
    }

    /// Run one input line. Recoverable errors are reported on `out` and the
    /// session goes on; anything else is returned.
    pub fn run_line(&mut self, line: &str, out: &mut dyn Write) -> Result<()> {
        match self.dispatch(line, out) {
            Ok(()) => Ok(()),
            Err(err) if err.is_recoverable() && !self.config().debug.panic => {
                warn!(%err, line, "recoverable error");
                writeln!(out, "error: {err}")?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn dispatch(&mut self, line: &str, out: &mut dyn Write) -> MathResult<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }
        if let Some(cmd) = line.strip_prefix(')') {
            return special::run(cmd, self.eval.config_mut(), out);
        }
        let (fns, value) = parse_expr(line, self.config().base().0)?;
        let result = self.eval.eval_chain(&fns, value)?;
        if self.config().debug.loops {
            for stats in self.eval.last_loops() {
                writeln!(out, "{}: {} iterations", stats.function, stats.iterations)?;
            }
        }
        writeln!(out, "{}", format_value(&result, self.config())?)?;
        Ok(())
    }
}

/// Split `fn* number` into the function chain and the operand.
fn parse_expr(line: &str, ibase: u32) -> MathResult<(Vec<UnaryFn>, Value)> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((number, names)) = words.split_last() else {
        return Err(MathError::Parse("empty expression".into()));
    };
    let fns = names
        .iter()
        .map(|name| {
            UnaryFn::from_name(name)
                .ok_or_else(|| MathError::Parse(format!("unknown function {name:?}")))
        })
        .collect::<MathResult<Vec<_>>>()?;
    if UnaryFn::from_name(number).is_some() {
        return Err(MathError::Parse(format!("{number} needs an argument")));
    }
    Ok((fns, parse_number(number, ibase)?))
}
