// ─────────────────────────────────────────────────────────────────────
// SCPN BigMath — Special Commands
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `)name [args]` commands that inspect or change the session settings.
//! With no argument a command prints its current setting.

use std::io::Write;

use tracing::debug;

use bigmath_types::config::{EngineConfig, DEBUG_FLAG_NAMES};
use bigmath_types::error::{MathError, MathResult};

const HELP: &str = "\
)help              this message
)prec [n]          float precision in decimal digits (1 to 1000000)
)base [n]          set input and output base (0 means 10, else 2 to 36)
)ibase [n]         input base
)obase [n]         output base for integers
)maxdigits [n]     integers longer than n digits print as floats (0: never)
)debug [flag [0|1]] show, toggle or set a debug flag (loop, panic)

Expressions: fn... number, applied right to left, e.g. `sqrt atan 2`.
Functions: sqrt asin acos atan";

fn number_arg(arg: &str) -> MathResult<u32> {
    arg.parse::<u32>()
        .ok()
        .filter(|&n| i32::try_from(n).is_ok())
        .ok_or_else(|| MathError::Parse(format!("value must be a non-negative integer: {arg}")))
}

fn flag(on: bool) -> u8 {
    u8::from(on)
}

/// Run the command text following `)`.
pub fn run(cmd: &str, config: &mut EngineConfig, out: &mut dyn Write) -> MathResult<()> {
    let words: Vec<&str> = cmd.split_whitespace().collect();
    let Some((&name, args)) = words.split_first() else {
        return Err(MathError::Parse("missing command after )".into()));
    };
    let max_args = if name == "debug" { 2 } else { 1 };
    if args.len() > max_args {
        return Err(MathError::Parse(format!("){name}: too many arguments")));
    }
    debug!(command = name, ?args, "special command");
    match (name, args) {
        ("help", []) => writeln!(out, "{HELP}")?,
        ("prec", []) => writeln!(out, "{}", config.float_prec)?,
        ("prec", [n]) => config.set_float_prec(number_arg(n)?)?,
        ("base" | "ibase" | "obase", []) => {
            let (ibase, obase) = (config.ibase, config.obase);
            writeln!(out, "ibase\t{ibase}\nobase\t{obase}")?;
        }
        ("base" | "ibase" | "obase", [n]) => {
            let base = number_arg(n)?;
            let (ibase, obase) = match name {
                "base" => (base, base),
                "ibase" => (base, config.obase),
                _ => (config.ibase, base),
            };
            config.set_base(ibase, obase)?;
        }
        ("maxdigits", []) => writeln!(out, "{}", config.max_digits)?,
        ("maxdigits", [n]) => config.max_digits = number_arg(n)?,
        ("debug", []) => {
            for name in DEBUG_FLAG_NAMES {
                writeln!(out, "{name}\t{}", flag(config.debug.get(name) == Some(true)))?;
            }
        }
        ("debug", [flag_name, rest @ ..]) => {
            let on = match rest.first() {
                None => !config.debug.get(flag_name).unwrap_or(false),
                Some(n) => number_arg(n)? != 0,
            };
            if !config.debug.set(flag_name, on) {
                writeln!(out, "no such debug flag: {flag_name}")?;
            } else if rest.is_empty() {
                writeln!(out, "{}", flag(on))?;
            }
        }
        ("help", _) => return Err(MathError::Parse(")help takes no arguments".into())),
        _ => return Err(MathError::Parse(format!("){name}: not recognized"))),
    }
    Ok(())
}
