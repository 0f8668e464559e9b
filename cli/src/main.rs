//! pullseq CLI - lazy sequence pipelines from the command line.

use clap::Parser;
use pullseq_cli::cli::{Cli, Command};
use pullseq_cli::{commands, common};

fn main() {
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the level, WARN otherwise.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run(args) => commands::run::run(args),
        Command::Demo => commands::demo::run(),
        Command::Completions(args) => {
            commands::completions::run(args);
            Ok(())
        }
    };

    if let Err(e) = result {
        common::error::render_and_exit(e, cli.no_color);
    }
}
