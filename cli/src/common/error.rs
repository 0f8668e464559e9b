//! Error handling utilities for the CLI.

use std::io::Write;

use nu_ansi_term::Color;
use thiserror::Error;

use super::pipeline::PipelineError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid pipeline: {0}")]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Sequence(#[from] pullseq::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    let label = if no_color {
        "error".to_string()
    } else {
        Color::Red.bold().paint("error").to_string()
    };
    let mut stderr = std::io::stderr().lock();
    writeln!(stderr, "{label}: {error}").ok();
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages() {
        let err = CliError::from(PipelineError::UnknownStage("zap".to_string()));
        assert_eq!(err.to_string(), "invalid pipeline: unknown stage `zap`");

        let err = CliError::from(pullseq::Error::BufferLimit { limit: 2 });
        assert_eq!(err.to_string(), "buffer limit exceeded: more than 2 element(s)");
    }
}
