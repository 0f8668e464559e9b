//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// pullseq - run lazy sequence pipelines over integers
#[derive(Parser, Debug)]
#[command(name = "pullseq", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a pipeline over a list of integers
    Run(RunArgs),

    /// Print a tour of the sequence operations
    Demo,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input values, in order
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Pipeline stages separated by `|`, e.g. "filter even | map *3 | sum"
    ///
    /// Stages: `filter <pred>`, `map <op>`, `sort [asc|desc]`, `cycle <n>`.
    /// The last stage may be a terminal: `collect` (default), `sum`, `min`,
    /// `max`, `all <pred>`, `any <pred>`, `group <pred>`.
    /// Predicates: `even`, `odd`, `>N`, `>=N`, `<N`, `<=N`, `==N`, `!=N`.
    /// Operations: `+N`, `-N`, `*N`, `/N`, `%N`, `neg`, `sq`.
    #[arg(short, long, default_value = "collect")]
    pub pipe: String,

    /// Maximum number of elements `cycle` may buffer
    #[arg(long)]
    pub max_buffer: Option<usize>,
}

/// Arguments for the `completions` command.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
