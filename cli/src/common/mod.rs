//! Common utilities shared across CLI commands.

pub mod error;
pub mod pipeline;

pub use error::CliResult;
