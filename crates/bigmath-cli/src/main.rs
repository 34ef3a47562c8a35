//! bigmath: arbitrary-precision sqrt, asin, acos and atan at the prompt.

mod repl;
mod special;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bigmath_types::config::EngineConfig;

use crate::repl::Session;

#[derive(Parser)]
#[command(name = "bigmath")]
#[command(about = "Arbitrary-precision square root and inverse trigonometry")]
#[command(version)]
struct Cli {
    /// Float precision in decimal digits
    #[arg(long)]
    prec: Option<u32>,

    /// Output base for integers (0 means 10)
    #[arg(long)]
    obase: Option<u32>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Evaluate this line and exit (repeatable)
    #[arg(short, long)]
    expr: Vec<String>,
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(&path.to_string_lossy())
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(prec) = cli.prec {
        config.set_float_prec(prec)?;
    }
    if let Some(obase) = cli.obase {
        config.set_base(config.ibase, obase)?;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bigmath=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(prec = config.float_prec, "starting session");
    let mut session = Session::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !cli.expr.is_empty() {
        for line in &cli.expr {
            session.run_line(line, &mut out)?;
        }
        return Ok(());
    }
    for line in io::stdin().lock().lines() {
        session.run_line(&line?, &mut out)?;
        out.flush()?;
    }
    Ok(())
}
