//! pullseq CLI library.
//!
//! This crate provides the command-line driver for the pullseq sequence
//! library. The public modules are primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;
