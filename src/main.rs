//! Loki games - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use listfold::{print_value, reduce, Op, Value};
use std::path::PathBuf;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => loki_games::tui::run(&PathBuf::from("loki_games.log")),
        Some(Command::Play { log_file }) => loki_games::tui::run(&log_file),
        Some(Command::Eval { op, values }) => run_eval(&op, &values),
    }
}

/// Runs one reduction from the command line.
fn run_eval(op: &str, raw: &[String]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let op = Op::from_str(op).map_err(|_| {
        let known: Vec<String> = Op::iter().map(|o| o.to_string()).collect();
        anyhow!(
            "unknown operator {op:?}; expected one of: {}",
            known.join(", ")
        )
    })?;

    // JSON literals parse as themselves; anything else is a string.
    let values: Vec<Value> = raw
        .iter()
        .map(|s| serde_json::from_str(s).unwrap_or_else(|_| Value::from(s.as_str())))
        .collect();

    let result = reduce(op, &values).context("reduction failed")?;
    print_value(&result);
    Ok(())
}
