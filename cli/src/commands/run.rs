//! The `run` command - apply a pipeline to the given values.

use std::io::Write;

use pullseq::MaterializeOptions;

use crate::cli::RunArgs;
use crate::common::CliResult;
use crate::common::pipeline::Pipeline;

/// Run the run command.
pub fn run(args: RunArgs) -> CliResult<()> {
    let pipeline: Pipeline = args.pipe.parse()?;
    let options = MaterializeOptions {
        max_len: args.max_buffer,
    };
    let output = pipeline.execute(args.values, &options)?;
    writeln!(std::io::stdout().lock(), "{output}")?;
    Ok(())
}
