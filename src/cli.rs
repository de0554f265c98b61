//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal tic-tac-toe and the listfold reduction runtime.
#[derive(Parser, Debug)]
#[command(name = "loki_games")]
#[command(about = "Terminal tic-tac-toe and the listfold runtime", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to `play`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe in the terminal
    Play {
        /// File the UI writes tracing output to
        #[arg(long, default_value = "loki_games.log")]
        log_file: PathBuf,
    },

    /// Fold values through a binary operator and print the result
    Eval {
        /// Operator name (add/plus, sub/minus, mul/mult, div, mod,
        /// and, or, eq, ne/neq, lt, le/lte, gt, ge/gte)
        op: String,

        /// Values as JSON literals; bare words parse as strings
        #[arg(required = true)]
        values: Vec<String>,
    },
}
